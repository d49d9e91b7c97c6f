use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::property::default_currency;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,

    pub property_id: String,

    #[serde(default)]
    pub property_title: Option<String>,

    #[serde(default)]
    pub guest_id: Option<String>,

    #[serde(default)]
    pub guest_name: Option<String>,

    pub check_in: NaiveDate,

    pub check_out: NaiveDate,

    #[serde(default = "default_guests")]
    pub guests: i64,

    pub total_amount: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    pub status: BookingStatus,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_guests() -> i64 {
    1
}

/// Booking lifecycle status. The wire names double as the status-filter
/// query values, so `Display` must stay in sync with the serde names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BookingStatus::Pending => "PENDING",
                BookingStatus::Confirmed => "CONFIRMED",
                BookingStatus::Cancelled => "CANCELLED",
                BookingStatus::Completed => "COMPLETED",
            }
        )
    }
}
