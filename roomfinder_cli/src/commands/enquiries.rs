use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use roomfinder_lib::validation;
use roomfinder_lib::Client;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct EnquiriesArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Post a reply to the given enquiry ID
    #[arg(long, requires = "message")]
    pub reply: Option<String>,

    /// Reply text, used with --reply
    #[arg(long)]
    pub message: Option<String>,
}

pub async fn run(args: &EnquiriesArgs, client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    if let (Some(enquiry_id), Some(message)) = (&args.reply, &args.message) {
        let sanitized = validation::validate_message(message)?;
        let enquiry = client.reply_enquiry(enquiry_id, &sanitized).await?;
        println!("Reply sent for enquiry {}", enquiry.id);
        return Ok(());
    }

    let mut dashboard = super::dashboard_for(client).await?;
    dashboard.fetch_enquiries(args.page).await;

    if let Some(error) = &dashboard.enquiries.error {
        bail!(error.clone());
    }

    match format {
        OutputFormat::Table => output::print_enquiries_table(&dashboard.enquiries.items),
        OutputFormat::Json => output::print_json(&dashboard.enquiries.items),
    }
    output::print_pagination(&dashboard.enquiries.pagination, "enquiries");

    Ok(())
}
