use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use roomfinder_lib::validation;
use roomfinder_lib::Client;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ReviewsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Post a reply to the given review ID
    #[arg(long, requires = "message")]
    pub respond: Option<String>,

    /// Reply text, used with --respond
    #[arg(long)]
    pub message: Option<String>,
}

pub async fn run(args: &ReviewsArgs, client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    if let (Some(review_id), Some(message)) = (&args.respond, &args.message) {
        let sanitized = validation::validate_message(message)?;
        let review = client.respond_review(review_id, &sanitized).await?;
        println!("Reply posted on review {}", review.id);
        return Ok(());
    }

    let mut dashboard = super::dashboard_for(client).await?;
    dashboard.fetch_reviews(args.page).await;

    if let Some(error) = &dashboard.reviews.error {
        bail!(error.clone());
    }

    match format {
        OutputFormat::Table => output::print_reviews_table(&dashboard.reviews.items),
        OutputFormat::Json => output::print_json(&dashboard.reviews.items),
    }
    output::print_pagination(&dashboard.reviews.pagination, "reviews");

    Ok(())
}
