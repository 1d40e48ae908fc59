//! CLI administration tool for the shortener.
//!
//! Inspects and manipulates the mapping store without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show record count and the next identifier
//! cargo run --bin admin -- stats
//!
//! # Shorten a URL directly against the database
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # Resolve an identifier
//! cargo run --bin admin -- lookup 2Bj
//!
//! # Encode counter values (no database needed)
//! cargo run --bin admin -- encode 10001 10002
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//!
//! A `shorten` run seeds its own counter from the current record count. If a
//! server is allocating at the same time, the store's unique index turns any
//! overlap into a retry with the next identifier.

use base62_shortener::application::services::ShortenerService;
use base62_shortener::config::{load_from_env, mask_connection_string};
use base62_shortener::domain::repositories::MappingRepository;
use base62_shortener::error::AppError;
use base62_shortener::infrastructure::persistence::PgMappingRepository;
use base62_shortener::server::connect_database;
use base62_shortener::state::DynShortenerService;
use base62_shortener::utils::base62::encode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show record count and the next identifier
    Stats,

    /// Shorten a URL
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Show the URL an identifier points to
    Lookup {
        /// Shortened ID (case-sensitive)
        id: String,
    },

    /// Print the identifier for one or more counter values
    Encode {
        /// Counter values
        #[arg(required = true)]
        values: Vec<u64>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Shorten { url } => handle_shorten(&connect().await?, &url).await?,
        Commands::Lookup { id } => handle_lookup(&connect().await?, &id).await?,
        Commands::Encode { values } => handle_encode(&values),
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

/// Connects to the database named by the environment.
async fn connect() -> Result<PgPool> {
    let config = load_from_env()?;

    connect_database(&config).await.with_context(|| {
        format!(
            "Failed to connect to database at {}",
            mask_connection_string(&config.database_url)
        )
    })
}

/// Builds a seeded shortener on top of the PostgreSQL store.
async fn shortener(pool: &PgPool) -> Result<DynShortenerService> {
    let repository: Arc<dyn MappingRepository> =
        Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    let service = ShortenerService::new(repository);

    service
        .initialize()
        .await
        .context("Failed to count stored mappings")?;

    Ok(service)
}

/// Displays store statistics.
///
/// Shows:
/// - Total number of mappings
/// - Identifier the next create will receive
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = shortener(pool).await?;
    let count = service.record_count().await?;

    println!(
        "  Mappings:        {}",
        count.to_string().bright_green().bold()
    );
    println!(
        "  Next identifier: {}",
        service.peek_next_id().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Creates a mapping and prints the assigned identifier.
async fn handle_shorten(pool: &PgPool, url: &str) -> Result<()> {
    let service = shortener(pool).await?;

    match service.create(url).await {
        Ok(mapping) => {
            println!("{}", "✅ Shortened".green().bold());
            println!("  URL: {}", mapping.original_url.cyan());
            println!("  ID:  {}", mapping.shortened_id.bright_green().bold());
            Ok(())
        }
        Err(AppError::Validation(message)) => {
            println!("{}", format!("❌ {}", message).red());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolves an identifier.
async fn handle_lookup(pool: &PgPool, id: &str) -> Result<()> {
    let service = shortener(pool).await?;

    match service.read(id).await {
        Ok(mapping) => {
            println!("  ID:      {}", mapping.shortened_id.bright_green().bold());
            println!("  URL:     {}", mapping.original_url.cyan());
            println!(
                "  Created: {}",
                mapping.created_at.to_rfc3339().bright_black()
            );
            Ok(())
        }
        Err(AppError::NotFound(message)) => {
            println!("{}", format!("⚠️  {}", message).yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints `value -> identifier` for each value.
fn handle_encode(values: &[u64]) {
    for value in values {
        println!("  {} -> {}", value, encode(*value).bright_green().bold());
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
