mod commands;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roomfinder_lib::{Client, FileTokenStore, Session};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "roomfinder")]
#[command(about = "Room Finder dashboard in the terminal")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides ROOMFINDER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login(commands::auth::LoginArgs),
    /// Sign out and clear the stored token
    Logout,
    /// Load every dashboard feed and print the summary
    Overview,
    /// Browse the public property listing
    Properties(commands::properties::PropertiesArgs),
    /// List your bookings
    Bookings(commands::bookings::BookingsArgs),
    /// List reviews across your properties
    Reviews(commands::reviews::ReviewsArgs),
    /// List enquiries for your properties
    Enquiries(commands::enquiries::EnquiriesArgs),
    /// List your favorite properties
    Favorites(commands::favorites::FavoritesArgs),
    /// List notifications
    Notifications(commands::notifications::NotificationsArgs),
    /// Show wallet balance and transactions
    Wallet(commands::wallet::WalletArgs),
    /// Manage revenue configurations (admin)
    Revenue(commands::revenue::RevenueArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roomfinder=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let session = Session::new(Box::new(FileTokenStore::new(token_path())));
    let client = Arc::new(match &cli.api_url {
        Some(url) => Client::with_base_url(url, session),
        None => Client::new(session),
    });

    match &cli.command {
        Commands::Login(args) => commands::auth::login(args, &client).await?,
        Commands::Logout => commands::auth::logout(&client).await?,
        Commands::Overview => commands::overview::run(&client, &format).await?,
        Commands::Properties(args) => commands::properties::run(args, &client, &format).await?,
        Commands::Bookings(args) => commands::bookings::run(args, &client, &format).await?,
        Commands::Reviews(args) => commands::reviews::run(args, &client, &format).await?,
        Commands::Enquiries(args) => commands::enquiries::run(args, &client, &format).await?,
        Commands::Favorites(args) => commands::favorites::run(args, &client, &format).await?,
        Commands::Notifications(args) => {
            commands::notifications::run(args, &client, &format).await?
        }
        Commands::Wallet(args) => commands::wallet::run(args, &client, &format).await?,
        Commands::Revenue(args) => commands::revenue::run(args, &client, &format).await?,
    }

    Ok(())
}

fn token_path() -> PathBuf {
    if let Some(path) = std::env::var_os("ROOMFINDER_TOKEN_FILE") {
        return PathBuf::from(path);
    }
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".roomfinder").join("token")
}
