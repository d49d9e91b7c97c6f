//! HTTP client for the Room Finder REST API.

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};
use url::Url;

use crate::envelope::{self, normalize_list, normalize_single, ListPage};
use crate::query::{BookingQuery, ListQuery, NotificationQuery, PropertyQuery, Query};
use crate::session::Session;
use crate::types::{
    Booking, DashboardStatsPatch, Enquiry, Favorite, FeeBreakdown, HostApplication,
    HostApplicationInput, LoginResponse, Notification, Property, RevenueConfig,
    RevenueConfigInput, RevenueConfigUpdate, Review, SupportTicket, UserProfile, WalletBalance,
    WalletTransaction, Withdrawal,
};
use crate::Error;

const DEFAULT_BASE_URL: &str = "https://api.roomfinder.app";
const EMPTY_RESPONSE: &str = "Empty response from server";

/// Single chokepoint for all backend communication.
///
/// Owns the bearer-token session and funnels every response through the
/// envelope normalization in [`crate::envelope`], so callers only ever see
/// the canonical shapes. Each request builds a fresh `reqwest::Client`
/// with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.roomfinder.app`,
    /// overridable with the `ROOMFINDER_API_URL` environment variable.
    base_api_url: String,
    session: Session,
}

impl Client {
    /// Creates a client pointing at the configured API, with the given
    /// session injected.
    pub fn new(session: Session) -> Self {
        let base_api_url = std::env::var("ROOMFINDER_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_api_url,
            session,
        }
    }

    /// Creates a client with an explicit base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, session: Session) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            session,
        }
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url_for(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl
        })
    }

    fn url_with(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        Ok(query.add_to_url(&self.url_for(path)?))
    }

    /// Sends an authenticated request and returns the parsed body
    /// verbatim. Deliberately permissive: no envelope is enforced here;
    /// the domain methods layer normalization on top, uniformly.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let url = self.url_for(path)?;
        self.send(method, url, body.as_ref(), true).await
    }

    /// Like [`Client::request`] but never attaches an `Authorization`
    /// header. Used for endpoints that must work before login.
    pub async fn public_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let url = self.url_for(path)?;
        self.send(method, url, body.as_ref(), false).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<Value, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;

        let mut request = http
            .request(method.clone(), url.clone())
            .header("content-type", "application/json")
            .header("accept", "application/json, text/plain, */*");
        if authenticated {
            if let Some(token) = self.session.token() {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "Sending request");
        let resp = request.send().await.map_err(|e| {
            tracing::error!(%url, "Failed to reach server: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!(%url, "Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        // A body that is not valid JSON is treated as an empty object, not
        // a fatal error; the empty-response check below decides the rest.
        let parsed = serde_json::from_str::<Value>(&text).unwrap_or_else(|e| {
            tracing::warn!(%url, "Response body is not JSON: {}", e);
            Value::Object(serde_json::Map::new())
        });

        if !status.is_success() || is_empty_body(&parsed) {
            let message = parsed
                .get("message")
                .or_else(|| parsed.get("error"))
                .and_then(Value::as_str)
                .unwrap_or(EMPTY_RESPONSE)
                .to_string();
            tracing::error!(
                %url,
                status = status.as_u16(),
                "Request rejected: {} | body: {}",
                message,
                truncate_body(&text)
            );
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(%url, status = status.as_u16(), "Request succeeded");
        Ok(parsed)
    }

    // -- auth --

    /// Signs in and stores the returned bearer token in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, Error> {
        let payload = json!({ "email": email, "password": password });
        let body = self
            .public_request(Method::POST, "/auth/login", Some(payload))
            .await?;
        let login: LoginResponse = normalize_single(&body, "login")?;
        self.session.set_token(Some(&login.token));
        Ok(login)
    }

    /// Signs out. The local token is cleared even when the backend call
    /// fails; a dropped logout request must not leave the client signed in.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = self.request(Method::POST, "/auth/logout", None).await;
        self.session.set_token(None);
        if let Err(e) = result {
            tracing::warn!("Logout request failed, token cleared locally: {}", e);
        }
        Ok(())
    }

    /// Fetches the signed-in user's profile.
    pub async fn me(&self) -> Result<UserProfile, Error> {
        let body = self.request(Method::GET, "/auth/me", None).await?;
        normalize_single(&body, "user")
    }

    // -- properties --

    /// Fetches the public property listing.
    ///
    /// On a transport-level failure this serves an empty page instead of
    /// an error: the listing is the landing surface and must render an
    /// empty state rather than crash when the backend is unreachable.
    pub async fn get_properties(&self, query: &PropertyQuery) -> Result<ListPage<Property>, Error> {
        let url = self.url_with("/properties", query)?;
        match self.send::<Value>(Method::GET, url, None, false).await {
            Ok(body) => Ok(normalize_list(&body, "properties", query.common.limit)),
            Err(Error::Transport(e)) => {
                tracing::warn!("Property listing unreachable, serving empty page: {}", e);
                Ok(ListPage::empty(query.common.limit))
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches a single property by ID.
    pub async fn get_property(&self, property_id: &str) -> Result<Property, Error> {
        let body = self
            .public_request(Method::GET, &format!("/properties/{}", property_id), None)
            .await?;
        normalize_single(&body, "property")
    }

    /// Fetches the signed-in host's own properties.
    pub async fn get_host_properties(&self, query: &ListQuery) -> Result<ListPage<Property>, Error> {
        let url = self.url_with("/host/properties", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "properties", query.common.limit))
    }

    // -- bookings --

    /// Fetches the signed-in guest's bookings.
    pub async fn get_guest_bookings(&self, query: &BookingQuery) -> Result<ListPage<Booking>, Error> {
        let url = self.url_with("/bookings", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "bookings", query.common.limit))
    }

    /// Fetches bookings across the signed-in host's properties.
    pub async fn get_host_bookings(&self, query: &BookingQuery) -> Result<ListPage<Booking>, Error> {
        let url = self.url_with("/host/bookings", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "bookings", query.common.limit))
    }

    /// Fetches a single booking by ID.
    pub async fn get_booking(&self, booking_id: &str) -> Result<Booking, Error> {
        let body = self
            .request(Method::GET, &format!("/bookings/{}", booking_id), None)
            .await?;
        normalize_single(&body, "booking")
    }

    // -- reviews --

    /// Fetches reviews across the signed-in host's properties.
    pub async fn get_host_reviews(&self, query: &ListQuery) -> Result<ListPage<Review>, Error> {
        let url = self.url_with("/host/reviews", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "reviews", query.common.limit))
    }

    /// Posts the host's reply to a review.
    pub async fn respond_review(&self, review_id: &str, response: &str) -> Result<Review, Error> {
        let payload = json!({ "response": response });
        let body = self
            .request(
                Method::POST,
                &format!("/reviews/{}/response", review_id),
                Some(payload),
            )
            .await?;
        normalize_single(&body, "review")
    }

    // -- enquiries --

    /// Fetches enquiries sent to the signed-in host.
    pub async fn get_enquiries(&self, query: &ListQuery) -> Result<ListPage<Enquiry>, Error> {
        let url = self.url_with("/enquiries", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "enquiries", query.common.limit))
    }

    /// Posts the host's reply to an enquiry.
    pub async fn reply_enquiry(&self, enquiry_id: &str, reply: &str) -> Result<Enquiry, Error> {
        let payload = json!({ "reply": reply });
        let body = self
            .request(
                Method::POST,
                &format!("/enquiries/{}/reply", enquiry_id),
                Some(payload),
            )
            .await?;
        normalize_single(&body, "enquiry")
    }

    // -- favorites --

    /// Fetches the signed-in guest's favorites.
    pub async fn get_favorites(&self, query: &ListQuery) -> Result<ListPage<Favorite>, Error> {
        let url = self.url_with("/favorites", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "favorites", query.common.limit))
    }

    /// Adds a property to the signed-in guest's favorites.
    pub async fn add_favorite(&self, property_id: &str) -> Result<(), Error> {
        let payload = json!({ "propertyId": property_id });
        let body = self
            .request(Method::POST, "/favorites", Some(payload))
            .await?;
        ensure_success(&body)
    }

    /// Removes a property from the signed-in guest's favorites.
    pub async fn remove_favorite(&self, property_id: &str) -> Result<(), Error> {
        let body = self
            .request(Method::DELETE, &format!("/favorites/{}", property_id), None)
            .await?;
        ensure_success(&body)
    }

    // -- notifications --

    /// Fetches the signed-in user's notifications.
    pub async fn get_notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<ListPage<Notification>, Error> {
        let url = self.url_with("/notifications", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "notifications", query.common.limit))
    }

    /// Marks one notification as read.
    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<(), Error> {
        let body = self
            .request(
                Method::PATCH,
                &format!("/notifications/{}/read", notification_id),
                None,
            )
            .await?;
        ensure_success(&body)
    }

    /// Marks every notification as read.
    pub async fn mark_all_notifications_read(&self) -> Result<(), Error> {
        let body = self
            .request(Method::PATCH, "/notifications/read-all", None)
            .await?;
        ensure_success(&body)
    }

    // -- wallet --

    /// Fetches the signed-in host's wallet balance.
    pub async fn get_wallet(&self) -> Result<WalletBalance, Error> {
        let body = self.request(Method::GET, "/wallet", None).await?;
        normalize_single(&body, "wallet")
    }

    /// Fetches the signed-in host's wallet transactions.
    pub async fn get_wallet_transactions(
        &self,
        query: &ListQuery,
    ) -> Result<ListPage<WalletTransaction>, Error> {
        let url = self.url_with("/wallet/transactions", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "transactions", query.common.limit))
    }

    /// Requests a withdrawal from the wallet balance.
    pub async fn request_withdrawal(&self, amount: f64, method: &str) -> Result<Withdrawal, Error> {
        let payload = json!({ "amount": amount, "method": method });
        let body = self
            .request(Method::POST, "/wallet/withdrawals", Some(payload))
            .await?;
        normalize_single(&body, "withdrawal")
    }

    // -- host application --

    /// Submits a host application for the signed-in guest.
    pub async fn submit_host_application(
        &self,
        input: &HostApplicationInput,
    ) -> Result<HostApplication, Error> {
        let url = self.url_for("/host/application")?;
        let body = self.send(Method::POST, url, Some(input), true).await?;
        normalize_single(&body, "application")
    }

    /// Fetches the signed-in user's host application, if any.
    pub async fn get_host_application(&self) -> Result<HostApplication, Error> {
        let body = self.request(Method::GET, "/host/application", None).await?;
        normalize_single(&body, "application")
    }

    // -- support --

    /// Opens a support ticket.
    pub async fn create_support_ticket(
        &self,
        subject: &str,
        message: &str,
    ) -> Result<SupportTicket, Error> {
        let payload = json!({ "subject": subject, "message": message });
        let body = self
            .request(Method::POST, "/support/tickets", Some(payload))
            .await?;
        normalize_single(&body, "ticket")
    }

    /// Fetches the signed-in user's support tickets.
    pub async fn get_support_tickets(
        &self,
        query: &ListQuery,
    ) -> Result<ListPage<SupportTicket>, Error> {
        let url = self.url_with("/support/tickets", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "tickets", query.common.limit))
    }

    // -- revenue configuration (admin) --

    /// Fetches all revenue configurations.
    pub async fn get_revenue_configs(
        &self,
        query: &ListQuery,
    ) -> Result<ListPage<RevenueConfig>, Error> {
        let url = self.url_with("/admin/revenue-configs", query)?;
        let body = self.send::<Value>(Method::GET, url, None, true).await?;
        Ok(normalize_list(&body, "configs", query.common.limit))
    }

    /// Creates a revenue configuration.
    pub async fn create_revenue_config(
        &self,
        input: &RevenueConfigInput,
    ) -> Result<RevenueConfig, Error> {
        let url = self.url_for("/admin/revenue-configs")?;
        let body = self.send(Method::POST, url, Some(input), true).await?;
        normalize_single(&body, "config")
    }

    /// Partially updates a revenue configuration.
    pub async fn update_revenue_config(
        &self,
        config_id: &str,
        update: &RevenueConfigUpdate,
    ) -> Result<RevenueConfig, Error> {
        let url = self.url_for(&format!("/admin/revenue-configs/{}", config_id))?;
        let body = self.send(Method::PATCH, url, Some(update), true).await?;
        normalize_single(&body, "config")
    }

    /// Activates a revenue configuration. The backend deactivates every
    /// other configuration as part of the same call.
    pub async fn activate_revenue_config(&self, config_id: &str) -> Result<RevenueConfig, Error> {
        let body = self
            .request(
                Method::POST,
                &format!("/admin/revenue-configs/{}/activate", config_id),
                None,
            )
            .await?;
        normalize_single(&body, "config")
    }

    /// Asks the backend to price an amount against the active
    /// configuration.
    pub async fn calculate_fees(&self, amount: f64, currency: &str) -> Result<FeeBreakdown, Error> {
        let payload = json!({ "amount": amount, "currency": currency });
        let body = self
            .request(Method::POST, "/admin/revenue-configs/calculate", Some(payload))
            .await?;
        normalize_single(&body, "breakdown")
    }

    // -- stats --

    /// Fetches the host dashboard stat counters.
    pub async fn get_host_stats(&self) -> Result<DashboardStatsPatch, Error> {
        let body = self.request(Method::GET, "/host/stats", None).await?;
        normalize_single(&body, "stats")
    }

    /// Fetches the guest dashboard stat counters.
    pub async fn get_guest_stats(&self) -> Result<DashboardStatsPatch, Error> {
        let body = self.request(Method::GET, "/dashboard/stats", None).await?;
        normalize_single(&body, "stats")
    }
}

fn ensure_success(body: &Value) -> Result<(), Error> {
    match envelope::failure_message(body) {
        Some(message) => Err(Error::Api {
            status: 200,
            message,
        }),
        None => Ok(()),
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::String(s) => s.is_empty(),
        Value::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
