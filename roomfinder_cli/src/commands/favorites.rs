use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use roomfinder_lib::Client;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct FavoritesArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Add a property to favorites by ID
    #[arg(long, conflicts_with = "remove")]
    pub add: Option<String>,

    /// Remove a property from favorites by ID
    #[arg(long)]
    pub remove: Option<String>,
}

pub async fn run(args: &FavoritesArgs, client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    if let Some(property_id) = &args.add {
        client.add_favorite(property_id).await?;
        println!("Added property {} to favorites", property_id);
        return Ok(());
    }
    if let Some(property_id) = &args.remove {
        client.remove_favorite(property_id).await?;
        println!("Removed property {} from favorites", property_id);
        return Ok(());
    }

    let mut dashboard = super::dashboard_for(client).await?;
    dashboard.fetch_favorites(args.page).await;

    if let Some(error) = &dashboard.favorites.error {
        bail!(error.clone());
    }

    match format {
        OutputFormat::Table => output::print_favorites_table(&dashboard.favorites.items),
        OutputFormat::Json => output::print_json(&dashboard.favorites.items),
    }
    output::print_pagination(&dashboard.favorites.pagination, "favorites");

    Ok(())
}
