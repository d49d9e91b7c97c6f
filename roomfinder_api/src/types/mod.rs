pub use crate::envelope::{ListPage, PageMeta};

mod property;
pub use self::property::{Property, PropertyKind};

mod booking;
pub use self::booking::{Booking, BookingStatus};

mod engagement;
pub use self::engagement::{Enquiry, Favorite, Notification, Review};

mod account;
pub use self::account::{
    ApprovalStatus, DashboardStatsPatch, HostApplication, HostApplicationInput, LoginResponse,
    Role, SupportTicket, UserProfile, WalletBalance, WalletTransaction, Withdrawal,
};

mod revenue;
pub use self::revenue::{FeeBreakdown, RevenueConfig, RevenueConfigInput, RevenueConfigUpdate};
