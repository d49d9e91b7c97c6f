use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use roomfinder_lib::validation;
use roomfinder_lib::Client;

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct WalletArgs {
    /// Page number for the transaction list
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Request a withdrawal of the given amount
    #[arg(long)]
    pub withdraw: Option<f64>,

    /// Payout method for --withdraw
    #[arg(long, default_value = "bank-transfer")]
    pub method: String,
}

pub async fn run(args: &WalletArgs, client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    if let Some(amount) = args.withdraw {
        validation::validate_amount(amount)?;
        let withdrawal = client.request_withdrawal(amount, &args.method).await?;
        println!(
            "Withdrawal {} requested: {:.2} {}",
            withdrawal.id, withdrawal.amount, withdrawal.currency
        );
        return Ok(());
    }

    match client.get_wallet().await {
        Ok(balance) => println!(
            "Balance: {:.2} {} available, {:.2} pending",
            balance.available, balance.currency, balance.pending
        ),
        Err(err) => tracing::warn!("Could not load wallet balance: {}", err),
    }

    let mut dashboard = super::dashboard_for(client).await?;
    dashboard.fetch_wallet(args.page).await;

    if let Some(error) = &dashboard.wallet.error {
        bail!(error.clone());
    }

    match format {
        OutputFormat::Table => output::print_transactions_table(&dashboard.wallet.items),
        OutputFormat::Json => output::print_json(&dashboard.wallet.items),
    }
    output::print_pagination(&dashboard.wallet.pagination, "transactions");

    Ok(())
}
