//! CLI administration tool for alias-shortener.
//!
//! Manages alias bindings and inspects the store directly, without going
//! through the HTTP API. Commands run through the same services as the
//! server, so validation and collision handling are identical.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a generated alias
//! cargo run --bin admin -- url add https://google.com
//!
//! # Save a URL under a chosen alias
//! cargo run --bin admin -- url add https://google.com --alias test_alias
//!
//! # Show where an alias points
//! cargo run --bin admin -- url show test_alias
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete test_alias
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`alias_shortener::config`]. `STORAGE_PATH`
//! selects the database file.

use alias_shortener::application::ServiceError;
use alias_shortener::application::services::{
    AliasPolicy, DeleteService, RedirectService, SaveService,
};
use alias_shortener::config::{Config, load_from_env};
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::infrastructure::persistence::{SqliteAliasRepository, open_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// CLI tool for managing alias-shortener.
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
    /// Manage alias bindings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Save a URL under a chosen or generated alias
    Add {
        /// Target URL (http or https)
        url: String,

        /// Custom alias (optional, generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the URL bound to an alias
    Show {
        /// Alias to look up
        alias: String,
    },

    /// Delete an alias
    Delete {
        /// Alias to delete
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env()?;

    let pool = open_pool(&config)
        .await
        .context("Failed to open database")?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    let repo = Arc::new(SqliteAliasRepository::new(Arc::new(pool.clone())));
    let timeout = config.request_timeout();
    let cancel = CancellationToken::new();

    match action {
        UrlAction::Add { url, alias } => {
            let service = SaveService::new(repo, AliasPolicy::from_config(config), timeout);
            add_url(&service, &url, alias.as_deref(), &cancel).await?;
        }
        UrlAction::Show { alias } => {
            let service = RedirectService::new(repo, timeout);
            show_url(&service, &alias, &cancel).await?;
        }
        UrlAction::Delete { alias, yes } => {
            let lookup = RedirectService::new(repo.clone(), timeout);
            let service = DeleteService::new(repo, timeout);
            delete_url(&lookup, &service, &alias, yes, &cancel).await?;
        }
    }

    Ok(())
}

/// Saves a URL and prints the alias it was bound to.
async fn add_url(
    service: &SaveService<SqliteAliasRepository>,
    url: &str,
    alias: Option<&str>,
    cancel: &CancellationToken,
) -> Result<()> {
    println!("{}", "🔗 Save URL".bright_blue().bold());
    println!();

    match service.save(url, alias, cancel).await {
        Ok(saved) => {
            println!("{}", "✅ URL saved".green().bold());
            println!();
            println!("  Alias: {}", saved.alias.bright_yellow().bold());
            println!("  URL:   {}", url.cyan());
            println!("  ID:    {}", saved.id.to_string().bright_black());
            println!();
            Ok(())
        }
        Err(e) => Err(describe(e)),
    }
}

/// Prints the target of an alias.
async fn show_url(
    service: &RedirectService<SqliteAliasRepository>,
    alias: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let record = service.find(alias, cancel).await.map_err(describe)?;

    println!("  Alias: {}", record.alias.bright_yellow().bold());
    println!("  URL:   {}", record.target_url.cyan());
    println!("  ID:    {}", record.id.to_string().bright_black());

    Ok(())
}

/// Deletes an alias after confirmation.
///
/// # Safety
///
/// - Shows the binding before asking
/// - Requires confirmation (default: No) unless `--yes` is given
async fn delete_url(
    lookup: &RedirectService<SqliteAliasRepository>,
    service: &DeleteService<SqliteAliasRepository>,
    alias: &str,
    skip_confirm: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    println!("{}", "🗑  Delete alias".bright_blue().bold());
    println!();

    let record = lookup.find(alias, cancel).await.map_err(describe)?;

    println!("  Alias: {}", record.alias.cyan());
    println!("  URL:   {}", record.target_url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.remove(alias, cancel).await.map_err(describe)?;

    println!();
    println!("{}", "✅ Alias deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Turns a service failure into a CLI error message.
fn describe(err: ServiceError) -> anyhow::Error {
    match err {
        ServiceError::Storage(source) => anyhow::anyhow!("Database error: {}", source),
        other => anyhow::anyhow!("{}", other),
    }
}

/// Displays store statistics.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = SqliteAliasRepository::new(Arc::new(pool.clone()));
    let aliases = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("  Aliases: {}", aliases.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            SqliteAliasRepository::new(Arc::new(pool.clone()))
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!("  File:   {}", config.storage_path.bright_white());
            println!();
        }
    }

    Ok(())
}
