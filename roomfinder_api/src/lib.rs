mod client;
mod envelope;
mod errors;
mod query;
mod session;
pub mod types;
pub use self::client::Client;
pub use self::envelope::{normalize_list, normalize_single, ListPage, PageMeta, DEFAULT_PAGE_SIZE};
pub use self::errors::Error;
pub use self::query::{BookingQuery, ListQuery, NotificationQuery, PropertyQuery, Query};
pub use self::session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
