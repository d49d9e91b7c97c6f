use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use roomfinder_lib::types::PropertyKind;
use roomfinder_lib::validation;
use roomfinder_lib::{Client, PropertyQuery, Query};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct PropertiesArgs {
    /// Search by title or description
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by city
    #[arg(long)]
    pub city: Option<String>,

    /// Filter by type: apartment, house, room, studio, villa, other
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Minimum price per night
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price per night
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub limit: i64,
}

pub async fn run(args: &PropertiesArgs, client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    let mut query = PropertyQuery::default()
        .with_page(args.page)
        .with_limit(args.limit)
        .with_price_range(args.min_price, args.max_price);

    if let Some(ref search) = args.search {
        let sanitized = validation::validate_search(search)?;
        query = query.with_search(&sanitized);
    }
    if let Some(ref city) = args.city {
        let sanitized = validation::validate_search(city)?;
        query = query.with_city(&sanitized);
    }
    if let Some(ref kind) = args.kind {
        query = query.with_kind(parse_kind(kind)?);
    }

    let page = client.get_properties(&query).await?;
    if !page.success {
        bail!(page
            .message
            .unwrap_or_else(|| "Failed to load properties".to_string()));
    }

    match format {
        OutputFormat::Table => output::print_properties_table(&page.items),
        OutputFormat::Json => output::print_json(&page.items),
    }
    output::print_pagination(&page.pagination, "properties");

    Ok(())
}

fn parse_kind(input: &str) -> Result<PropertyKind> {
    Ok(match input.trim().to_lowercase().as_str() {
        "apartment" => PropertyKind::Apartment,
        "house" => PropertyKind::House,
        "room" => PropertyKind::Room,
        "studio" => PropertyKind::Studio,
        "villa" => PropertyKind::Villa,
        "other" => PropertyKind::Other,
        _ => bail!(
            "unknown property type '{}'. Valid values: apartment, house, room, studio, villa, other",
            input
        ),
    })
}
