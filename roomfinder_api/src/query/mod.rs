mod booking;
mod common;
mod notification;
mod property;

pub use self::booking::BookingQuery;
pub use self::common::{ListQuery, Query, QueryCommon};
pub use self::notification::NotificationQuery;
pub use self::property::PropertyQuery;
