use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use roomfinder_lib::types::{RevenueConfigInput, RevenueConfigUpdate};
use roomfinder_lib::{compute_breakdown, Client, RevenueManager};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct RevenueArgs {
    #[command(subcommand)]
    pub command: RevenueCommands,
}

#[derive(Subcommand)]
pub enum RevenueCommands {
    /// List revenue configurations
    List,
    /// Create a configuration (always starts inactive)
    Create(CreateArgs),
    /// Activate a configuration, deactivating all others
    Activate {
        /// Configuration ID
        id: String,
    },
    /// Update fields on a configuration
    Update(UpdateArgs),
    /// Price an amount against the active configuration
    Calc(CalcArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    /// Host-side fee percentage
    #[arg(long, default_value = "10")]
    pub host_fee: f64,

    /// Host-side fee floor
    #[arg(long, default_value = "0")]
    pub host_fee_min: f64,

    /// Host-side fee cap (no cap when omitted)
    #[arg(long)]
    pub host_fee_max: Option<f64>,

    /// Guest-side fee percentage
    #[arg(long, default_value = "5")]
    pub guest_fee: f64,

    /// Guest-side fee floor
    #[arg(long, default_value = "0")]
    pub guest_fee_min: f64,

    /// Guest-side fee cap (no cap when omitted)
    #[arg(long)]
    pub guest_fee_max: Option<f64>,

    /// Apply the fees to bookings
    #[arg(long)]
    pub bookings: bool,

    /// Apply the fees to withdrawals
    #[arg(long)]
    pub withdrawals: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Configuration ID
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub host_fee: Option<f64>,

    #[arg(long)]
    pub host_fee_min: Option<f64>,

    /// New host-side fee cap
    #[arg(long, conflicts_with = "clear_host_fee_max")]
    pub host_fee_max: Option<f64>,

    /// Remove the host-side fee cap ("no limit")
    #[arg(long)]
    pub clear_host_fee_max: bool,

    #[arg(long)]
    pub guest_fee: Option<f64>,

    #[arg(long)]
    pub guest_fee_min: Option<f64>,

    /// New guest-side fee cap
    #[arg(long, conflicts_with = "clear_guest_fee_max")]
    pub guest_fee_max: Option<f64>,

    /// Remove the guest-side fee cap ("no limit")
    #[arg(long)]
    pub clear_guest_fee_max: bool,
}

#[derive(Args)]
pub struct CalcArgs {
    /// Amount to price
    pub amount: f64,

    /// Currency code
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Compute locally against the cached active configuration instead
    /// of asking the backend
    #[arg(long)]
    pub local: bool,
}

pub async fn run(args: &RevenueArgs, client: &Arc<Client>, format: &OutputFormat) -> Result<()> {
    let manager = RevenueManager::new(Arc::clone(client));

    match &args.command {
        RevenueCommands::List => {
            let configs = manager.refresh().await?;
            match format {
                OutputFormat::Table => output::print_configs_table(&configs),
                OutputFormat::Json => output::print_json(&configs),
            }
        }
        RevenueCommands::Create(create) => {
            let config = manager
                .create(RevenueConfigInput {
                    name: create.name.clone(),
                    description: create.description.clone(),
                    host_service_fee_percent: create.host_fee,
                    host_service_fee_min: create.host_fee_min,
                    host_service_fee_max: create.host_fee_max,
                    guest_service_fee_percent: create.guest_fee,
                    guest_service_fee_min: create.guest_fee_min,
                    guest_service_fee_max: create.guest_fee_max,
                    applies_to_bookings: create.bookings,
                    applies_to_withdrawals: create.withdrawals,
                    is_active: false,
                })
                .await?;
            println!("Created configuration {} (inactive)", config.id);
        }
        RevenueCommands::Activate { id } => {
            manager.refresh().await?;
            let config = manager.activate(id).await?;
            println!("Activated configuration {} ({})", config.id, config.name);
            match format {
                OutputFormat::Table => output::print_configs_table(&manager.cached()),
                OutputFormat::Json => output::print_json(&manager.cached()),
            }
        }
        RevenueCommands::Update(update) => {
            let payload = RevenueConfigUpdate {
                name: update.name.clone(),
                description: update.description.clone(),
                host_service_fee_percent: update.host_fee,
                host_service_fee_min: update.host_fee_min,
                host_service_fee_max: cap_change(update.host_fee_max, update.clear_host_fee_max),
                guest_service_fee_percent: update.guest_fee,
                guest_service_fee_min: update.guest_fee_min,
                guest_service_fee_max: cap_change(update.guest_fee_max, update.clear_guest_fee_max),
                applies_to_bookings: None,
                applies_to_withdrawals: None,
            };
            let config = manager.update(&update.id, &payload).await?;
            println!("Updated configuration {}", config.id);
        }
        RevenueCommands::Calc(calc) => {
            manager.refresh().await?;
            let breakdown = if calc.local {
                let Some(active) = manager.active() else {
                    bail!("no active revenue configuration");
                };
                compute_breakdown(&active, calc.amount, &calc.currency)
            } else {
                manager.calculate(calc.amount, &calc.currency).await?
            };
            match format {
                OutputFormat::Json => output::print_json(&breakdown),
                OutputFormat::Table => {
                    println!(
                        "Amount:           {:.2} {}",
                        breakdown.original_amount, breakdown.currency
                    );
                    println!(
                        "Guest fee:        {:.2} ({}%)",
                        breakdown.guest_fee_amount, breakdown.guest_fee_percent
                    );
                    println!(
                        "Host fee:         {:.2} ({}%)",
                        breakdown.host_fee_amount, breakdown.host_fee_percent
                    );
                    println!("Guest pays:       {:.2}", breakdown.guest_pays);
                    println!("Host receives:    {:.2}", breakdown.host_receives);
                    println!("Platform revenue: {:.2}", breakdown.platform_revenue);
                }
            }
        }
    }

    Ok(())
}

/// Maps the cap flags to the wire semantics: a new value, an explicit
/// clear (`null`), or leave-unchanged (omitted).
fn cap_change(value: Option<f64>, clear: bool) -> Option<Option<f64>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}
