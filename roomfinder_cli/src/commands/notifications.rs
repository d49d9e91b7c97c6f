use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use roomfinder_lib::Client;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct NotificationsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Only show unread notifications
    #[arg(long)]
    pub unread: bool,

    /// Mark the given notification ID as read
    #[arg(long, conflicts_with = "mark_all_read")]
    pub mark_read: Option<String>,

    /// Mark every notification as read
    #[arg(long)]
    pub mark_all_read: bool,
}

pub async fn run(
    args: &NotificationsArgs,
    client: &Arc<Client>,
    format: &OutputFormat,
) -> Result<()> {
    let mut dashboard = super::dashboard_for(client).await?;

    if let Some(id) = &args.mark_read {
        dashboard.mark_notification_read(id).await?;
        println!("Marked notification {} as read", id);
        return Ok(());
    }
    if args.mark_all_read {
        dashboard.mark_all_notifications_read().await?;
        println!("Marked all notifications as read");
        return Ok(());
    }

    dashboard.fetch_notifications(args.page, args.unread).await;

    if let Some(error) = &dashboard.notifications.error {
        bail!(error.clone());
    }

    match format {
        OutputFormat::Table => output::print_notifications_table(&dashboard.notifications.items),
        OutputFormat::Json => output::print_json(&dashboard.notifications.items),
    }
    output::print_pagination(&dashboard.notifications.pagination, "notifications");

    Ok(())
}
