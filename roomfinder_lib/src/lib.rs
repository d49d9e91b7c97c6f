//! Dashboard layer for Room Finder: per-feed state, pagination derivation,
//! concurrent feed fan-out, and the revenue configuration manager.
//!
//! Wraps the `roomfinder_api` client with the state handling the dashboard
//! surfaces need: wholesale page replacement, stale-while-error feeds,
//! role gating, and cross-feed stat aggregation.

pub mod dashboard;
pub mod error;
pub mod feed;
pub mod paging;
pub mod revenue;
pub mod validation;

pub use roomfinder_api;
pub use roomfinder_api::types;
pub use roomfinder_api::{
    BookingQuery, Client, FileTokenStore, ListPage, ListQuery, MemoryTokenStore,
    NotificationQuery, PageMeta, PropertyQuery, Query, Session, TokenStore,
};

pub use dashboard::{Dashboard, DashboardStats, FEED_PAGE_SIZE};
pub use error::RoomFinderError;
pub use feed::Feed;
pub use revenue::{compute_breakdown, RevenueManager};
