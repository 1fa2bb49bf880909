//! CLI administration tool for smolink.
//!
//! Works directly against the SQLite store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the stored authorization token
//! cargo run --bin admin -- token show
//!
//! # Provision a token if none exists yet
//! cargo run --bin admin -- token provision
//!
//! # Count stored links
//! cargo run --bin admin -- links count
//!
//! # Check the database / create the tables
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite URL, defaults to `sqlite://smolink.db`

use smolink::application::services::AuthService;
use smolink::config::database_url_from_env;
use smolink::domain::repositories::{LinkRepository, TokenRepository};
use smolink::infrastructure::persistence::{
    self, SqliteLinkRepository, SqliteTokenRepository, ensure_schema,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing smolink.
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
    /// Manage the authorization token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Inspect stored links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Print stored tokens
    Show,

    /// Generate a token if none exists
    Provision,
}

#[derive(Subcommand)]
enum LinksAction {
    /// Print the number of stored links
    Count,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create missing tables
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = database_url_from_env();
    let pool = persistence::connect(&database_url, 1)
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Token { action } => handle_token_action(action, pool).await?,
        Commands::Links { action } => handle_links_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches token commands.
async fn handle_token_action(action: TokenAction, pool: Arc<SqlitePool>) -> Result<()> {
    let repo = Arc::new(SqliteTokenRepository::new(pool));

    match action {
        TokenAction::Show => {
            let tokens = repo
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

            if tokens.is_empty() {
                println!("{}", "  No token found".yellow());
                println!(
                    "  Create one with: {} admin token provision",
                    "cargo run --bin".bright_cyan()
                );
                return Ok(());
            }

            println!(
                "  {:<4} {:<20} {}",
                "ID".bright_white().bold(),
                "Created".bright_white().bold(),
                "Token".bright_white().bold()
            );
            for token in &tokens {
                println!(
                    "  {:<4} {:<20} {}",
                    token.id,
                    token.created_at.format("%Y-%m-%d %H:%M"),
                    token.key.bright_yellow()
                );
            }
        }
        TokenAction::Provision => {
            let service = AuthService::new(repo);

            match service
                .provision_default_token()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to provision token: {}", e))?
            {
                Some(token) => {
                    println!("{}", "Token created".green().bold());
                    println!();
                    println!(
                        "  {}: Bearer {}",
                        "Authorization".bright_cyan(),
                        token.bright_yellow()
                    );
                }
                None => {
                    println!("{}", "A token is already provisioned".yellow());
                }
            }
        }
    }

    Ok(())
}

async fn handle_links_action(action: LinksAction, pool: Arc<SqlitePool>) -> Result<()> {
    let repo = SqliteLinkRepository::new(pool);

    match action {
        LinksAction::Count => {
            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

            println!("  Links: {}", count.to_string().bright_white().bold());
        }
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Init => {
            ensure_schema(pool).await.context("Failed to create tables")?;

            println!("{}", "Tables ready".green().bold());
        }
    }

    Ok(())
}
