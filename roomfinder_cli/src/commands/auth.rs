use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Args;
use roomfinder_lib::types::Role;
use roomfinder_lib::Client;

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password (falls back to ROOMFINDER_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,
}

pub async fn login(args: &LoginArgs, client: &Arc<Client>) -> Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => std::env::var("ROOMFINDER_PASSWORD")
            .map_err(|_| anyhow!("provide --password or set ROOMFINDER_PASSWORD"))?,
    };

    let login = client.login(&args.email, &password).await?;
    let role = match login.user.role {
        Role::Guest => "guest",
        Role::Host => "host",
        Role::Admin => "admin",
    };
    println!("Signed in as {} ({})", login.user.email, role);
    Ok(())
}

pub async fn logout(client: &Arc<Client>) -> Result<()> {
    client.logout().await?;
    println!("Signed out");
    Ok(())
}
