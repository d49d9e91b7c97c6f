//! Revenue/fee configuration manager.
//!
//! CRUD over named fee policies plus the fee-breakdown calculator. The
//! manager keeps a concurrent cache of the known configurations so the
//! single-active-policy invariant can be mirrored locally the moment an
//! activation call succeeds, without waiting for a refetch.

use std::sync::Arc;

use dashmap::DashMap;
use roomfinder_api::types::{FeeBreakdown, RevenueConfig, RevenueConfigInput, RevenueConfigUpdate};
use roomfinder_api::{Client, ListQuery, Query};

use crate::error::RoomFinderError;
use crate::validation;

pub struct RevenueManager {
    client: Arc<Client>,
    configs: DashMap<String, RevenueConfig>,
}

impl RevenueManager {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            configs: DashMap::new(),
        }
    }

    /// Repopulates the cache from the backend and returns the fresh list.
    pub async fn refresh(&self) -> Result<Vec<RevenueConfig>, RoomFinderError> {
        let page = self
            .client
            .get_revenue_configs(&ListQuery::default().with_limit(100))
            .await?;
        if !page.success {
            let message = page
                .message
                .unwrap_or_else(|| "Failed to load revenue configurations".to_string());
            return Err(roomfinder_api::Error::Api {
                status: 200,
                message,
            }
            .into());
        }
        self.configs.clear();
        for config in &page.items {
            self.configs.insert(config.id.clone(), config.clone());
        }
        Ok(page.items)
    }

    /// The cached configurations, sorted by name for stable display.
    pub fn cached(&self) -> Vec<RevenueConfig> {
        let mut configs: Vec<RevenueConfig> =
            self.configs.iter().map(|entry| entry.value().clone()).collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// The currently active configuration, if any.
    pub fn active(&self) -> Option<RevenueConfig> {
        self.configs
            .iter()
            .find(|entry| entry.value().is_active)
            .map(|entry| entry.value().clone())
    }

    /// Creates a configuration. Name and description are required, and a
    /// new configuration always starts inactive regardless of the input.
    pub async fn create(
        &self,
        mut input: RevenueConfigInput,
    ) -> Result<RevenueConfig, RoomFinderError> {
        if input.name.trim().is_empty() {
            return Err(RoomFinderError::InvalidInput(
                "configuration name is required".to_string(),
            ));
        }
        if input.description.trim().is_empty() {
            return Err(RoomFinderError::InvalidInput(
                "configuration description is required".to_string(),
            ));
        }
        input.is_active = false;

        let config = self.client.create_revenue_config(&input).await?;
        self.configs.insert(config.id.clone(), config.clone());
        Ok(config)
    }

    /// Partially updates a configuration. Use `Some(None)` on a fee cap
    /// to clear it ("no limit"); `None` leaves the field unchanged.
    pub async fn update(
        &self,
        config_id: &str,
        update: &RevenueConfigUpdate,
    ) -> Result<RevenueConfig, RoomFinderError> {
        let config = self.client.update_revenue_config(config_id, update).await?;
        self.configs.insert(config.id.clone(), config.clone());
        Ok(config)
    }

    /// Activates a configuration.
    ///
    /// The backend deactivates every other configuration in the same
    /// call; on success the cache mirrors that: the target becomes the
    /// single active entry.
    pub async fn activate(&self, config_id: &str) -> Result<RevenueConfig, RoomFinderError> {
        let mut activated = self.client.activate_revenue_config(config_id).await?;
        activated.is_active = true;

        for mut entry in self.configs.iter_mut() {
            let active = entry.key() == config_id;
            entry.value_mut().is_active = active;
        }
        self.configs.insert(activated.id.clone(), activated.clone());
        Ok(activated)
    }

    /// Prices an amount against the active configuration via the backend.
    /// Refused locally, with no network call, when no cached
    /// configuration is active.
    pub async fn calculate(
        &self,
        amount: f64,
        currency: &str,
    ) -> Result<FeeBreakdown, RoomFinderError> {
        validation::validate_amount(amount)?;
        let currency = validation::validate_currency(currency)?;
        if self.active().is_none() {
            return Err(RoomFinderError::InvalidInput(
                "no active revenue configuration".to_string(),
            ));
        }
        Ok(self.client.calculate_fees(amount, &currency).await?)
    }
}

/// Pure local counterpart of the backend fee calculator: one amount
/// against one configuration. Each side's percentage fee is clamped to
/// its `[min, max]` band (no upper clamp when the cap is unset).
pub fn compute_breakdown(config: &RevenueConfig, amount: f64, currency: &str) -> FeeBreakdown {
    let host_fee = fee_for(
        amount,
        config.host_service_fee_percent,
        config.host_service_fee_min,
        config.host_service_fee_max,
    );
    let guest_fee = fee_for(
        amount,
        config.guest_service_fee_percent,
        config.guest_service_fee_min,
        config.guest_service_fee_max,
    );
    FeeBreakdown {
        original_amount: amount,
        currency: currency.to_string(),
        host_fee_amount: host_fee,
        host_fee_percent: config.host_service_fee_percent,
        guest_fee_amount: guest_fee,
        guest_fee_percent: config.guest_service_fee_percent,
        guest_pays: amount + guest_fee,
        host_receives: amount - host_fee,
        platform_revenue: host_fee + guest_fee,
    }
}

fn fee_for(amount: f64, percent: f64, min: f64, max: Option<f64>) -> f64 {
    let mut fee = amount * percent / 100.0;
    if fee < min {
        fee = min;
    }
    if let Some(max) = max {
        if fee > max {
            fee = max;
        }
    }
    fee
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RevenueConfig {
        RevenueConfig {
            id: "rc1".to_string(),
            name: "Standard".to_string(),
            description: None,
            host_service_fee_percent: 10.0,
            host_service_fee_min: 1.0,
            host_service_fee_max: Some(50.0),
            guest_service_fee_percent: 5.0,
            guest_service_fee_min: 0.5,
            guest_service_fee_max: None,
            applies_to_bookings: true,
            applies_to_withdrawals: false,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn breakdown_totals_balance() {
        let breakdown = compute_breakdown(&config(), 200.0, "EUR");

        assert_eq!(breakdown.host_fee_amount, 20.0);
        assert_eq!(breakdown.guest_fee_amount, 10.0);
        assert_eq!(breakdown.guest_pays, 210.0);
        assert_eq!(breakdown.host_receives, 180.0);
        assert_eq!(breakdown.platform_revenue, 30.0);
        // The platform take is exactly what leaves the guest and does not
        // reach the host.
        assert_eq!(
            breakdown.guest_pays - breakdown.host_receives,
            breakdown.platform_revenue
        );
    }

    #[test]
    fn fee_respects_minimum() {
        // 10% of 5.00 is 0.50, below the 1.00 floor.
        let breakdown = compute_breakdown(&config(), 5.0, "EUR");
        assert_eq!(breakdown.host_fee_amount, 1.0);
    }

    #[test]
    fn fee_respects_cap_when_set() {
        // 10% of 10_000 is 1_000, above the 50.00 host cap; the guest
        // side has no cap and keeps the raw percentage.
        let breakdown = compute_breakdown(&config(), 10_000.0, "EUR");
        assert_eq!(breakdown.host_fee_amount, 50.0);
        assert_eq!(breakdown.guest_fee_amount, 500.0);
    }
}
