use std::sync::Arc;

use anyhow::Result;
use roomfinder_lib::paging;
use roomfinder_lib::{Client, Feed};

use crate::output::{self, OutputFormat};

pub async fn run(client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    let mut dashboard = super::dashboard_for(client).await?;
    dashboard.load_all().await;

    if matches!(format, OutputFormat::Json) {
        output::print_json(&serde_json::json!({
            "stats": &dashboard.stats,
            "feeds": {
                "properties": feed_summary(&dashboard.properties, "properties"),
                "bookings": feed_summary(&dashboard.bookings, "bookings"),
                "reviews": feed_summary(&dashboard.reviews, "reviews"),
                "enquiries": feed_summary(&dashboard.enquiries, "enquiries"),
                "favorites": feed_summary(&dashboard.favorites, "favorites"),
                "notifications": feed_summary(&dashboard.notifications, "notifications"),
                "wallet": feed_summary(&dashboard.wallet, "transactions"),
            }
        }));
        return Ok(());
    }

    match &dashboard.profile {
        Some(profile) => println!("Signed in as {}", profile.email),
        None => println!("Not signed in"),
    }
    println!();
    println!("Properties: {}", dashboard.stats.total_properties);
    println!("Bookings:   {}", dashboard.stats.total_bookings);
    println!("Earnings:   {:.2}", dashboard.stats.total_earnings);
    match dashboard.stats.average_rating {
        Some(rating) => println!("Rating:     {:.1}", rating),
        None => println!("Rating:     -"),
    }
    println!("Unread:     {}", dashboard.stats.unread_notifications);
    println!();

    print_feed_line(&dashboard.properties, "properties");
    print_feed_line(&dashboard.bookings, "bookings");
    print_feed_line(&dashboard.reviews, "reviews");
    print_feed_line(&dashboard.enquiries, "enquiries");
    print_feed_line(&dashboard.favorites, "favorites");
    print_feed_line(&dashboard.notifications, "notifications");
    print_feed_line(&dashboard.wallet, "transactions");

    Ok(())
}

fn print_feed_line<T>(feed: &Feed<T>, noun: &str) {
    match &feed.error {
        Some(error) => println!("{:<14} unavailable: {}", noun, error),
        None => println!("{:<14} {}", noun, paging::range_label(&feed.pagination, noun)),
    }
}

fn feed_summary<T>(feed: &Feed<T>, noun: &str) -> serde_json::Value {
    serde_json::json!({
        "loaded": feed.items.len(),
        "label": paging::range_label(&feed.pagination, noun),
        "error": feed.error.clone(),
    })
}
