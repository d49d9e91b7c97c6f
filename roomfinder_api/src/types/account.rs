//! Account-side entities: profiles, auth payloads, wallet, host
//! applications, support tickets, and dashboard stat patches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::property::default_currency;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,

    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    pub role: Role,

    #[serde(default)]
    pub approval_status: ApprovalStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Guest,
    Host,
    Admin,
}

/// Backend-reported host-approval state. `NotApplied` is the default for
/// accounts that never submitted a host application.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    #[default]
    #[serde(other)]
    NotApplied,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub available: f64,

    #[serde(default)]
    pub pending: f64,

    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: String,

    pub amount: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: String,

    pub amount: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HostApplicationInput {
    pub business_name: String,
    pub phone: String,
    pub about: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HostApplication {
    pub id: String,

    #[serde(default)]
    pub business_name: Option<String>,

    pub status: ApprovalStatus,

    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: String,

    pub subject: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial stats record from the stats endpoints. Every field is optional:
/// a patch only carries the counters its endpoint owns, and consumers merge
/// patches without zeroing fields a patch does not mention.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsPatch {
    #[serde(default)]
    pub total_properties: Option<i64>,

    #[serde(default)]
    pub total_bookings: Option<i64>,

    #[serde(default)]
    pub total_earnings: Option<f64>,

    #[serde(default)]
    pub average_rating: Option<f64>,

    #[serde(default)]
    pub unread_notifications: Option<i64>,
}
