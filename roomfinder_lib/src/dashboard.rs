//! Dashboard feed controller.
//!
//! Owns one [`Feed`] per data stream plus the top-line stat counters, and
//! drives re-fetches from two triggers: the initial mount (a concurrent
//! fan-out where each feed's failure is isolated) and user interaction
//! (page clicks and status filters).

use std::future::Future;
use std::sync::Arc;

use roomfinder_api::types::{
    ApprovalStatus, Booking, BookingStatus, DashboardStatsPatch, Enquiry, Favorite, Notification,
    Property, Review, Role, UserProfile, WalletTransaction,
};
use roomfinder_api::{BookingQuery, Client, ListPage, ListQuery, NotificationQuery, Query};

use crate::error::RoomFinderError;
use crate::feed::Feed;

/// Items requested per feed page.
pub const FEED_PAGE_SIZE: i64 = 10;

const HOST_ACCESS_REQUIRED: &str = "Host access required";

/// Top-line dashboard counters, merged from whichever stat responses
/// arrived last.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: i64,
    pub total_bookings: i64,
    pub total_earnings: f64,
    pub average_rating: Option<f64>,
    pub unread_notifications: i64,
}

impl DashboardStats {
    /// Partial merge: only the fields a patch carries are overwritten.
    /// A later patch for an unrelated feed never zeroes counters it did
    /// not touch.
    pub fn apply(&mut self, patch: &DashboardStatsPatch) {
        if let Some(v) = patch.total_properties {
            self.total_properties = v;
        }
        if let Some(v) = patch.total_bookings {
            self.total_bookings = v;
        }
        if let Some(v) = patch.total_earnings {
            self.total_earnings = v;
        }
        if let Some(v) = patch.average_rating {
            self.average_rating = Some(v);
        }
        if let Some(v) = patch.unread_notifications {
            self.unread_notifications = v;
        }
    }
}

/// Per-session dashboard state: the signed-in profile, every feed, and
/// the stat counters.
pub struct Dashboard {
    client: Arc<Client>,
    pub profile: Option<UserProfile>,
    pub stats: DashboardStats,
    pub properties: Feed<Property>,
    pub bookings: Feed<Booking>,
    pub reviews: Feed<Review>,
    pub enquiries: Feed<Enquiry>,
    pub favorites: Feed<Favorite>,
    pub notifications: Feed<Notification>,
    pub wallet: Feed<WalletTransaction>,
}

impl Dashboard {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            profile: None,
            stats: DashboardStats::default(),
            properties: Feed::default(),
            bookings: Feed::default(),
            reviews: Feed::default(),
            enquiries: Feed::default(),
            favorites: Feed::default(),
            notifications: Feed::default(),
            wallet: Feed::default(),
        }
    }

    /// Signs in and remembers the returned profile for role gating.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), RoomFinderError> {
        let login = self.client.login(email, password).await?;
        self.profile = Some(login.user);
        Ok(())
    }

    /// Loads the profile for an already-stored token, e.g. after a
    /// process restart.
    pub async fn restore_profile(&mut self) -> Result<(), RoomFinderError> {
        self.profile = Some(self.client.me().await?);
        Ok(())
    }

    /// Whether the signed-in user may see host-only feeds: approved hosts
    /// and admins qualify.
    pub fn is_host(&self) -> bool {
        match &self.profile {
            Some(p) => {
                p.role == Role::Admin
                    || (p.role == Role::Host && p.approval_status == ApprovalStatus::Approved)
            }
            None => false,
        }
    }

    /// Fetches every eligible feed concurrently. Feeds settle
    /// independently: one failing or slow feed never blocks or clears a
    /// sibling, its error is recorded on that feed alone.
    pub async fn load_all(&mut self) {
        let client = Arc::clone(&self.client);
        let host = self.is_host();

        self.bookings.begin();
        self.favorites.begin();
        self.notifications.begin();
        self.properties.begin();
        self.reviews.begin();
        self.enquiries.begin();
        self.wallet.begin();

        let (bookings, favorites, notifications, properties, reviews, enquiries, wallet, stats) =
            tokio::join!(
                bookings_page(&client, host, 1, None),
                favorites_page(&client, 1),
                notifications_page(&client, 1, false),
                host_gated(host, properties_page(&client, 1)),
                host_gated(host, reviews_page(&client, 1)),
                host_gated(host, enquiries_page(&client, 1)),
                host_gated(host, wallet_page(&client, 1)),
                stats_patch(&client, &self.profile),
            );

        settle(&mut self.bookings, bookings, "bookings");
        settle(&mut self.favorites, favorites, "favorites");
        settle(&mut self.notifications, notifications, "notifications");
        settle(&mut self.properties, properties, "properties");
        settle(&mut self.reviews, reviews, "reviews");
        settle(&mut self.enquiries, enquiries, "enquiries");
        settle(&mut self.wallet, wallet, "wallet");

        match stats {
            Ok(patch) => self.stats.apply(&patch),
            Err(err) => tracing::warn!("Stats fetch failed: {}", err),
        }
    }

    /// Re-fetches the bookings feed for a page, optionally server-side
    /// filtered by status.
    pub async fn fetch_bookings(&mut self, page: i64, status: Option<BookingStatus>) {
        self.bookings.begin();
        let result = bookings_page(&self.client, self.is_host(), page, status).await;
        settle(&mut self.bookings, result, "bookings");
    }

    /// Re-fetches the host properties feed for a page.
    pub async fn fetch_properties(&mut self, page: i64) {
        self.properties.begin();
        let result = host_gated(self.is_host(), properties_page(&self.client, page)).await;
        settle(&mut self.properties, result, "properties");
    }

    /// Re-fetches the host reviews feed for a page.
    pub async fn fetch_reviews(&mut self, page: i64) {
        self.reviews.begin();
        let result = host_gated(self.is_host(), reviews_page(&self.client, page)).await;
        settle(&mut self.reviews, result, "reviews");
    }

    /// Re-fetches the enquiries feed for a page.
    pub async fn fetch_enquiries(&mut self, page: i64) {
        self.enquiries.begin();
        let result = host_gated(self.is_host(), enquiries_page(&self.client, page)).await;
        settle(&mut self.enquiries, result, "enquiries");
    }

    /// Re-fetches the favorites feed for a page.
    pub async fn fetch_favorites(&mut self, page: i64) {
        self.favorites.begin();
        let result = favorites_page(&self.client, page).await;
        settle(&mut self.favorites, result, "favorites");
    }

    /// Re-fetches the notifications feed for a page.
    pub async fn fetch_notifications(&mut self, page: i64, unread_only: bool) {
        self.notifications.begin();
        let result = notifications_page(&self.client, page, unread_only).await;
        settle(&mut self.notifications, result, "notifications");
    }

    /// Re-fetches the wallet transactions feed for a page.
    pub async fn fetch_wallet(&mut self, page: i64) {
        self.wallet.begin();
        let result = host_gated(self.is_host(), wallet_page(&self.client, page)).await;
        settle(&mut self.wallet, result, "wallet");
    }

    /// Refreshes the stat counters from the role-appropriate endpoint.
    pub async fn refresh_stats(&mut self) -> Result<(), RoomFinderError> {
        let patch = stats_patch(&self.client, &self.profile).await?;
        self.stats.apply(&patch);
        Ok(())
    }

    /// Marks one notification read, mirroring the flip on the loaded page.
    pub async fn mark_notification_read(&mut self, id: &str) -> Result<(), RoomFinderError> {
        self.client.mark_notification_read(id).await?;
        if let Some(item) = self.notifications.items.iter_mut().find(|n| n.id == id) {
            if !item.read {
                item.read = true;
                self.stats.unread_notifications = (self.stats.unread_notifications - 1).max(0);
            }
        }
        Ok(())
    }

    /// Marks every notification read, mirroring the flip on the loaded
    /// page.
    pub async fn mark_all_notifications_read(&mut self) -> Result<(), RoomFinderError> {
        self.client.mark_all_notifications_read().await?;
        for item in self.notifications.items.iter_mut() {
            item.read = true;
        }
        self.stats.unread_notifications = 0;
        Ok(())
    }

    /// The loaded bookings passing a display-only status filter. The
    /// server-side filter drives pagination counts; this only narrows
    /// what the current page shows.
    pub fn visible_bookings(&self, status: Option<BookingStatus>) -> Vec<&Booking> {
        match status {
            Some(status) => self.bookings.visible_by(|b| b.status == status),
            None => self.bookings.items.iter().collect(),
        }
    }
}

fn settle<T>(feed: &mut Feed<T>, result: Result<ListPage<T>, RoomFinderError>, label: &str) {
    match result {
        Ok(page) => feed.resolve(page),
        Err(err) => {
            tracing::warn!(feed = label, "Feed fetch failed: {}", err);
            feed.fail(err.to_string());
        }
    }
}

/// Wraps a host-only fetch: callers that do not qualify get the fixed
/// access error and the inner future is never polled, so no network call
/// is issued.
async fn host_gated<T, F>(host: bool, fetch: F) -> Result<T, RoomFinderError>
where
    F: Future<Output = Result<T, RoomFinderError>>,
{
    if !host {
        return Err(RoomFinderError::AccessDenied(HOST_ACCESS_REQUIRED.to_string()));
    }
    fetch.await
}

fn list_query(page: i64) -> ListQuery {
    ListQuery::default().with_page(page).with_limit(FEED_PAGE_SIZE)
}

async fn bookings_page(
    client: &Client,
    host: bool,
    page: i64,
    status: Option<BookingStatus>,
) -> Result<ListPage<Booking>, RoomFinderError> {
    let mut query = BookingQuery::default()
        .with_page(page)
        .with_limit(FEED_PAGE_SIZE);
    if let Some(status) = status {
        query = query.with_status(status);
    }
    let page = if host {
        client.get_host_bookings(&query).await?
    } else {
        client.get_guest_bookings(&query).await?
    };
    Ok(page)
}

async fn properties_page(client: &Client, page: i64) -> Result<ListPage<Property>, RoomFinderError> {
    Ok(client.get_host_properties(&list_query(page)).await?)
}

async fn reviews_page(client: &Client, page: i64) -> Result<ListPage<Review>, RoomFinderError> {
    Ok(client.get_host_reviews(&list_query(page)).await?)
}

async fn enquiries_page(client: &Client, page: i64) -> Result<ListPage<Enquiry>, RoomFinderError> {
    Ok(client.get_enquiries(&list_query(page)).await?)
}

async fn favorites_page(client: &Client, page: i64) -> Result<ListPage<Favorite>, RoomFinderError> {
    Ok(client.get_favorites(&list_query(page)).await?)
}

async fn wallet_page(
    client: &Client,
    page: i64,
) -> Result<ListPage<WalletTransaction>, RoomFinderError> {
    Ok(client.get_wallet_transactions(&list_query(page)).await?)
}

async fn notifications_page(
    client: &Client,
    page: i64,
    unread_only: bool,
) -> Result<ListPage<Notification>, RoomFinderError> {
    let mut query = NotificationQuery::default()
        .with_page(page)
        .with_limit(FEED_PAGE_SIZE);
    if unread_only {
        query = query.unread_only();
    }
    Ok(client.get_notifications(&query).await?)
}

async fn stats_patch(
    client: &Client,
    profile: &Option<UserProfile>,
) -> Result<DashboardStatsPatch, RoomFinderError> {
    let patch = match profile {
        Some(p) if p.role == Role::Host || p.role == Role::Admin => {
            client.get_host_stats().await?
        }
        Some(_) => client.get_guest_stats().await?,
        None => DashboardStatsPatch::default(),
    };
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_merge_is_partial() {
        let mut stats = DashboardStats::default();
        stats.apply(&DashboardStatsPatch {
            total_properties: Some(7),
            total_earnings: Some(1250.0),
            ..Default::default()
        });
        stats.apply(&DashboardStatsPatch {
            total_bookings: Some(31),
            unread_notifications: Some(4),
            ..Default::default()
        });

        // The second patch did not mention properties or earnings; they
        // survive the merge.
        assert_eq!(stats.total_properties, 7);
        assert_eq!(stats.total_earnings, 1250.0);
        assert_eq!(stats.total_bookings, 31);
        assert_eq!(stats.unread_notifications, 4);
        assert_eq!(stats.average_rating, None);
    }

    #[test]
    fn stats_merge_overwrites_mentioned_fields() {
        let mut stats = DashboardStats::default();
        stats.apply(&DashboardStatsPatch {
            total_bookings: Some(10),
            ..Default::default()
        });
        stats.apply(&DashboardStatsPatch {
            total_bookings: Some(11),
            ..Default::default()
        });
        assert_eq!(stats.total_bookings, 11);
    }
}
