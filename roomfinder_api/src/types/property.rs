use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rental listing as returned by the properties endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<PropertyKind>,

    pub price_per_night: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub max_guests: Option<i64>,

    #[serde(default)]
    pub bedrooms: Option<i64>,

    #[serde(default)]
    pub bathrooms: Option<i64>,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub host_id: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub review_count: i64,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    Apartment,
    House,
    Room,
    Studio,
    Villa,
    Other,
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PropertyKind::Apartment => "apartment",
                PropertyKind::House => "house",
                PropertyKind::Room => "room",
                PropertyKind::Studio => "studio",
                PropertyKind::Villa => "villa",
                PropertyKind::Other => "other",
            }
        )
    }
}
