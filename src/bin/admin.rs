//! CLI administration tool for the tourism catalog.
//!
//! Database maintenance and catalogue statistics without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show PostgreSQL version and applied migrations
//! cargo run --bin admin -- db info
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Row counts and attractions per type
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL`, or the `DB_*` components accepted by the server.

use tourism_catalog::config::{Config, mask_connection_string};
use tourism_catalog::domain::types::AttractionType;
use tourism_catalog::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;

/// CLI tool for managing the tourism catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show catalogue statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Prints row counts per table and the attraction count per type.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Catalogue statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Addresses", "addresses"),
        ("Attractions", "attractions"),
        ("Services", "services"),
        ("Tickets", "ticket_info"),
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;
        println!("  {:<13}{}", label, count.to_string().bright_green().bold());
    }
    println!();

    let per_type: Vec<(Option<String>, i64)> = sqlx::query_as(
        "SELECT attraction_type, COUNT(*) FROM attractions GROUP BY attraction_type ORDER BY 2 DESC",
    )
    .fetch_all(pool)
    .await?;

    if per_type.is_empty() {
        return Ok(());
    }

    println!("{}", "Attractions by type".bright_blue().bold());
    for (code, count) in per_type {
        let label = code
            .as_deref()
            .and_then(AttractionType::from_code)
            .map(|t| t.display_name())
            .unwrap_or("(не указан)");
        println!("  {:<24}{}", label, count.to_string().bright_green());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{} {}",
                "Checking".bright_blue(),
                mask_connection_string(&config.database_url)
            );

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: Vec<(i64, String)> = sqlx::query_as(
                "SELECT version, description FROM _sqlx_migrations ORDER BY version",
            )
            .fetch_all(pool)
            .await
            .unwrap_or_default();

            println!("{}", "Database Information".bright_blue().bold());
            println!();
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Applied migrations: {}", migrations.len());
            for (version, description) in migrations {
                println!("    {} {}", version.to_string().dimmed(), description);
            }
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "Migrations up to date".green().bold());
        }
    }

    Ok(())
}
