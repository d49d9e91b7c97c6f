use chrono::{DateTime, Utc};
use roomfinder_lib::paging;
use roomfinder_lib::types::{
    Booking, Enquiry, Favorite, Notification, Property, RevenueConfig, Review, WalletTransaction,
};
use roomfinder_lib::PageMeta;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct PropertyRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "City")]
    #[serde(rename = "City")]
    city: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "Per Night")]
    #[serde(rename = "Per Night")]
    price: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
}

#[derive(Tabled, Serialize)]
struct BookingRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Property")]
    #[serde(rename = "Property")]
    property: String,
    #[tabled(rename = "Check-in")]
    #[serde(rename = "Check-in")]
    check_in: String,
    #[tabled(rename = "Check-out")]
    #[serde(rename = "Check-out")]
    check_out: String,
    #[tabled(rename = "Guests")]
    #[serde(rename = "Guests")]
    guests: i64,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct ReviewRow {
    #[tabled(rename = "Property")]
    #[serde(rename = "Property")]
    property: String,
    #[tabled(rename = "Guest")]
    #[serde(rename = "Guest")]
    guest: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Comment")]
    #[serde(rename = "Comment")]
    comment: String,
    #[tabled(rename = "Replied")]
    #[serde(rename = "Replied")]
    replied: String,
}

#[derive(Tabled, Serialize)]
struct EnquiryRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Property")]
    #[serde(rename = "Property")]
    property: String,
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    from: String,
    #[tabled(rename = "Message")]
    #[serde(rename = "Message")]
    message: String,
    #[tabled(rename = "Replied")]
    #[serde(rename = "Replied")]
    replied: String,
}

#[derive(Tabled, Serialize)]
struct FavoriteRow {
    #[tabled(rename = "Property")]
    #[serde(rename = "Property")]
    property: String,
    #[tabled(rename = "Added")]
    #[serde(rename = "Added")]
    added: String,
}

#[derive(Tabled, Serialize)]
struct NotificationRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Notification")]
    #[serde(rename = "Notification")]
    message: String,
    #[tabled(rename = "Read")]
    #[serde(rename = "Read")]
    read: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
}

#[derive(Tabled, Serialize)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct ConfigRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Host Fee")]
    #[serde(rename = "Host Fee")]
    host_fee: String,
    #[tabled(rename = "Guest Fee")]
    #[serde(rename = "Guest Fee")]
    guest_fee: String,
    #[tabled(rename = "Bookings")]
    #[serde(rename = "Bookings")]
    bookings: String,
    #[tabled(rename = "Withdrawals")]
    #[serde(rename = "Withdrawals")]
    withdrawals: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
}

// -- Row builders --

fn build_property_rows(properties: &[Property]) -> Vec<PropertyRow> {
    properties
        .iter()
        .map(|p| PropertyRow {
            id: p.id.clone(),
            title: p.title.clone(),
            city: p.city.clone().unwrap_or_default(),
            kind: p.kind.map(|k| k.to_string()).unwrap_or_default(),
            price: format_money(p.price_per_night, &p.currency),
            rating: match p.rating {
                Some(rating) => format!("{:.1} ({})", rating, p.review_count),
                None => "-".to_string(),
            },
        })
        .collect()
}

fn build_booking_rows(bookings: &[Booking]) -> Vec<BookingRow> {
    bookings
        .iter()
        .map(|b| BookingRow {
            id: b.id.clone(),
            property: b
                .property_title
                .clone()
                .unwrap_or_else(|| b.property_id.clone()),
            check_in: b.check_in.to_string(),
            check_out: b.check_out.to_string(),
            guests: b.guests,
            total: format_money(b.total_amount, &b.currency),
            status: b.status.to_string(),
        })
        .collect()
}

fn build_review_rows(reviews: &[Review]) -> Vec<ReviewRow> {
    reviews
        .iter()
        .map(|r| ReviewRow {
            property: r.property_id.clone(),
            guest: r.guest_name.clone().unwrap_or_default(),
            rating: format!("{:.1}", r.rating),
            comment: truncate(r.comment.as_deref().unwrap_or(""), 60),
            replied: yes_no(r.response.is_some()),
        })
        .collect()
}

fn build_enquiry_rows(enquiries: &[Enquiry]) -> Vec<EnquiryRow> {
    enquiries
        .iter()
        .map(|e| EnquiryRow {
            id: e.id.clone(),
            property: e.property_id.clone(),
            from: e.sender_name.clone().unwrap_or_default(),
            message: truncate(&e.message, 60),
            replied: yes_no(e.reply.is_some()),
        })
        .collect()
}

fn build_favorite_rows(favorites: &[Favorite]) -> Vec<FavoriteRow> {
    favorites
        .iter()
        .map(|f| FavoriteRow {
            property: f
                .property_title
                .clone()
                .unwrap_or_else(|| f.property_id.clone()),
            added: format_date(f.created_at),
        })
        .collect()
}

fn build_notification_rows(notifications: &[Notification]) -> Vec<NotificationRow> {
    notifications
        .iter()
        .map(|n| NotificationRow {
            id: n.id.clone(),
            message: match &n.title {
                Some(title) => format!("{}: {}", title, truncate(&n.message, 50)),
                None => truncate(&n.message, 60),
            },
            read: yes_no(n.read),
            date: format_date(n.created_at),
        })
        .collect()
}

fn build_transaction_rows(transactions: &[WalletTransaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: format_date(t.created_at),
            kind: t.kind.clone().unwrap_or_default(),
            amount: format_money(t.amount, &t.currency),
            status: t.status.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_config_rows(configs: &[RevenueConfig]) -> Vec<ConfigRow> {
    configs
        .iter()
        .map(|c| ConfigRow {
            id: c.id.clone(),
            name: c.name.clone(),
            host_fee: format_fee(
                c.host_service_fee_percent,
                c.host_service_fee_min,
                c.host_service_fee_max,
            ),
            guest_fee: format_fee(
                c.guest_service_fee_percent,
                c.guest_service_fee_min,
                c.guest_service_fee_max,
            ),
            bookings: yes_no(c.applies_to_bookings),
            withdrawals: yes_no(c.applies_to_withdrawals),
            active: yes_no(c.is_active),
        })
        .collect()
}

// -- Table output --

pub fn print_properties_table(properties: &[Property]) {
    println!("{}", Table::new(build_property_rows(properties)));
}

pub fn print_bookings_table(bookings: &[Booking]) {
    println!("{}", Table::new(build_booking_rows(bookings)));
}

pub fn print_reviews_table(reviews: &[Review]) {
    println!("{}", Table::new(build_review_rows(reviews)));
}

pub fn print_enquiries_table(enquiries: &[Enquiry]) {
    println!("{}", Table::new(build_enquiry_rows(enquiries)));
}

pub fn print_favorites_table(favorites: &[Favorite]) {
    println!("{}", Table::new(build_favorite_rows(favorites)));
}

pub fn print_notifications_table(notifications: &[Notification]) {
    println!("{}", Table::new(build_notification_rows(notifications)));
}

pub fn print_transactions_table(transactions: &[WalletTransaction]) {
    println!("{}", Table::new(build_transaction_rows(transactions)));
}

pub fn print_configs_table(configs: &[RevenueConfig]) {
    println!("{}", Table::new(build_config_rows(configs)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Pagination footer --

/// The pagination strip a list command prints under its table: the range
/// label, the Previous/Next markers, and the sliding page window with the
/// current page bracketed.
pub fn pagination_line(meta: &PageMeta, noun: &str) -> String {
    let window = paging::page_window(meta)
        .iter()
        .map(|page| {
            if *page == meta.current_page {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let previous = if paging::has_previous(meta) { "<" } else { "·" };
    let next = if paging::has_next(meta) { ">" } else { "·" };
    format!(
        "{} | {} {} {}",
        paging::range_label(meta, noun),
        previous,
        window,
        next
    )
}

pub fn print_pagination(meta: &PageMeta, noun: &str) {
    eprintln!("{}", pagination_line(meta, noun));
}

// -- Formatting helpers --

fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

fn format_fee(percent: f64, min: f64, max: Option<f64>) -> String {
    match max {
        Some(max) => format!("{}% ({:.2}-{:.2})", percent, min, max),
        None => format!("{}% (min {:.2})", percent, min),
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
