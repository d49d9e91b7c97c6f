//! Guest-engagement entities: reviews, enquiries, favorites, and
//! notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,

    pub property_id: String,

    #[serde(default)]
    pub booking_id: Option<String>,

    #[serde(default)]
    pub guest_name: Option<String>,

    pub rating: f64,

    #[serde(default)]
    pub comment: Option<String>,

    /// The host's reply, if one has been posted.
    #[serde(default)]
    pub response: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: String,

    pub property_id: String,

    #[serde(default)]
    pub sender_name: Option<String>,

    #[serde(default)]
    pub sender_email: Option<String>,

    pub message: String,

    #[serde(default)]
    pub reply: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,

    pub property_id: String,

    #[serde(default)]
    pub property_title: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    pub message: String,

    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub read: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
