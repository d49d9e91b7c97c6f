pub mod auth;
pub mod bookings;
pub mod enquiries;
pub mod favorites;
pub mod notifications;
pub mod overview;
pub mod properties;
pub mod reviews;
pub mod revenue;
pub mod wallet;

use std::sync::Arc;

use anyhow::Result;
use roomfinder_lib::{Client, Dashboard};

/// Builds a dashboard for the stored session. A missing or expired token
/// just leaves the profile unset; the affected feeds will report their
/// own errors.
pub(crate) async fn dashboard_for(client: &Arc<Client>) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new(Arc::clone(client));
    if client.session().token().is_some() {
        if let Err(err) = dashboard.restore_profile().await {
            tracing::warn!("Could not restore profile: {}", err);
        }
    }
    Ok(dashboard)
}
