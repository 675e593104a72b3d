//! Create the bootstrap administrator account if it does not exist yet.
//!
//! Uses the same storage settings as the server (`STORAGE_BACKEND`,
//! `STORAGE_PATH`, `STORAGE_KEY`, `DATABASE_URL`, `ADMIN_EMAIL`).
//!
//! Run it while the server is stopped. A running server holds the directory
//! in memory and rewrites the whole snapshot on its next mutation, which drops
//! an administrator seeded behind its back. To seed a server that is about to
//! start, set `ADMIN_PASSWORD` (and optionally `ADMIN_PHONE`) in its
//! environment instead; it seeds at startup before accepting requests.

use anyhow::{Context, Result};
use clap::Parser;
use directory_core::config::{admin_email_from_env, StorageConfig};
use directory_core::domains::auth::ensure_admin;
use directory_core::domains::directory::Directory;
use directory_core::kernel::{open_snapshot_store, Argon2Hasher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seed_admin")]
#[command(about = "Seed the bootstrap administrator account")]
struct Cli {
    /// Administrator password
    #[arg(long, env = "ADMIN_PASSWORD")]
    password: String,

    /// Administrator phone number (10 digits)
    #[arg(long, env = "ADMIN_PHONE", default_value = "0700000000")]
    phone: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,directory_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let storage = StorageConfig::from_env().context("Failed to load storage configuration")?;
    let admin_email = admin_email_from_env();

    let store = open_snapshot_store(&storage).await?;
    let directory = Directory::open(store, admin_email.clone()).await?;

    match ensure_admin(&directory, &Argon2Hasher::default(), &cli.password, &cli.phone)
        .await
        .context("Failed to seed administrator")?
    {
        Some(admin) => println!("✓ Created administrator {} ({})", admin_email, admin.id),
        None => println!("✓ Administrator {} already exists", admin_email),
    }

    Ok(())
}
