//! Revenue-configuration entities: named fee policies and the derived fee
//! breakdown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::property::default_currency;

/// A named fee policy. At most one configuration is active at a time;
/// activating one deactivates all others server-side.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RevenueConfig {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub host_service_fee_percent: f64,

    #[serde(default)]
    pub host_service_fee_min: f64,

    /// `None` means no upper cap on the host-side fee.
    #[serde(default)]
    pub host_service_fee_max: Option<f64>,

    pub guest_service_fee_percent: f64,

    #[serde(default)]
    pub guest_service_fee_min: f64,

    /// `None` means no upper cap on the guest-side fee.
    #[serde(default)]
    pub guest_service_fee_max: Option<f64>,

    #[serde(default)]
    pub applies_to_bookings: bool,

    #[serde(default)]
    pub applies_to_withdrawals: bool,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a configuration. New configurations always start
/// inactive; the manager forces `is_active` to false before sending.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RevenueConfigInput {
    pub name: String,
    pub description: String,
    pub host_service_fee_percent: f64,
    pub host_service_fee_min: f64,
    pub host_service_fee_max: Option<f64>,
    pub guest_service_fee_percent: f64,
    pub guest_service_fee_min: f64,
    pub guest_service_fee_max: Option<f64>,
    pub applies_to_bookings: bool,
    pub applies_to_withdrawals: bool,
    pub is_active: bool,
}

/// Partial update payload. Omitted fields (`None`) are left unchanged by
/// the backend. The fee caps use a double `Option`: `Some(None)`
/// serializes an explicit `null`, which clears the cap ("no limit") —
/// distinct from omitting the field.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RevenueConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_service_fee_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_service_fee_min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_service_fee_max: Option<Option<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_service_fee_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_service_fee_min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_service_fee_max: Option<Option<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_bookings: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_withdrawals: Option<bool>,
}

/// Derived fee computation for one amount against the active
/// configuration. Never persisted; recomputed fresh on every call.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub original_amount: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    pub host_fee_amount: f64,

    pub host_fee_percent: f64,

    pub guest_fee_amount: f64,

    pub guest_fee_percent: f64,

    /// What the guest is charged: amount plus the guest-side fee.
    pub guest_pays: f64,

    /// What the host is paid out: amount minus the host-side fee.
    pub host_receives: f64,

    /// Platform take: both fees combined.
    pub platform_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_omits_unset_fields() {
        let update = RevenueConfigUpdate {
            name: Some("Summer".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Summer"}));
    }

    #[test]
    fn update_clears_cap_with_explicit_null() {
        let update = RevenueConfigUpdate {
            host_service_fee_max: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"hostServiceFeeMax": null}));
    }

    #[test]
    fn update_sets_cap_value() {
        let update = RevenueConfigUpdate {
            guest_service_fee_max: Some(Some(40.0)),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"guestServiceFeeMax": 40.0}));
    }
}
