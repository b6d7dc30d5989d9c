//! CLI administration tool for the book store API.
//!
//! Provides database diagnostics, table statistics and API secret generation
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show row counts per table
//! cargo run --bin admin -- stats
//!
//! # Empty every table (asks for confirmation)
//! cargo run --bin admin -- db truncate
//!
//! # Generate a new API_SECRET
//! cargo run --bin admin -- secret generate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//!   for the `db` and `stats` commands

use bookstore_api::config::{Config, secret_fingerprint};

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// Tables in dependency order, children first.
const TABLES: [&str; 6] = ["book_genres", "orders", "books", "genres", "menus", "users"];

/// CLI tool for managing the book store API.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// API secret helpers
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Delete all rows from every table
    Truncate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Generate a random URL-safe secret
    Generate {
        /// Number of random bytes before encoding
        #[arg(short, long, default_value_t = 32)]
        bytes: usize,

        /// Print only the secret, for use in scripts
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Secret { action } => handle_secret_action(action)?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Displays row counts for every table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count rows in {table}"))?;

        println!(
            "  {:<12} {}",
            format!("{table}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
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

            let applied: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
        DbAction::Truncate { yes } => truncate_all(pool, yes).await?,
    }

    Ok(())
}

/// Empties every table and resets identity counters.
async fn truncate_all(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Truncate tables".bright_blue().bold());
    println!();
    println!("  Tables: {}", TABLES.join(", ").cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete ALL rows from these tables?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::query(&format!(
        "TRUNCATE TABLE {} RESTART IDENTITY CASCADE",
        TABLES.join(", ")
    ))
    .execute(pool)
    .await
    .context("Failed to truncate tables")?;

    println!("{}", "✅ All tables emptied".green().bold());
    println!();

    Ok(())
}

fn handle_secret_action(action: SecretAction) -> Result<()> {
    match action {
        SecretAction::Generate { bytes, raw } => {
            anyhow::ensure!(bytes >= 16, "Use at least 16 random bytes");

            let secret = generate_secret(bytes);

            if raw {
                println!("{secret}");
                return Ok(());
            }

            println!("{}", "🔑 New API secret".bright_blue().bold());
            println!();
            println!("  Secret:      {}", secret.bright_yellow().bold());
            println!("  Fingerprint: {}", secret_fingerprint(&secret).bright_black());
            println!();
            println!("{}", "Add this to your environment:".bright_white());
            println!("  {}={}", "API_SECRET".bright_cyan(), secret.bright_yellow());
            println!();
            println!("{}", "Example:".bright_white());
            println!(
                "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/books",
                secret.bright_yellow()
            );
            println!();
        }
    }

    Ok(())
}

/// Random bytes from the thread RNG, base64url-encoded without padding.
fn generate_secret(bytes: usize) -> String {
    use rand::RngCore;

    let mut buf = vec![0u8; bytes];
    rand::rng().fill_bytes(&mut buf);

    URL_SAFE_NO_PAD.encode(buf)
}
