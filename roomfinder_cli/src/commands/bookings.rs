use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use roomfinder_lib::validation;
use roomfinder_lib::Client;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct BookingsArgs {
    /// Filter by status: pending, confirmed, cancelled, completed
    #[arg(long)]
    pub status: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,
}

pub async fn run(args: &BookingsArgs, client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    let status = args
        .status
        .as_deref()
        .map(validation::validate_booking_status)
        .transpose()?;

    let mut dashboard = super::dashboard_for(client).await?;
    dashboard.fetch_bookings(args.page, status).await;

    if let Some(error) = &dashboard.bookings.error {
        bail!(error.clone());
    }

    match format {
        OutputFormat::Table => output::print_bookings_table(&dashboard.bookings.items),
        OutputFormat::Json => output::print_json(&dashboard.bookings.items),
    }
    output::print_pagination(&dashboard.bookings.pagination, "bookings");

    Ok(())
}
