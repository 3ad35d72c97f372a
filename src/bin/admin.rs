//! CLI administration tool for book-catalog.
//!
//! Provides commands for managing authors and publishers, viewing catalog
//! statistics, and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Add an author (prompts for the name when omitted)
//! cargo run --bin admin -- author add --name "Jorge Luis Borges"
//!
//! # List publishers
//! cargo run --bin admin -- publisher list
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
//! - `DATABASE_URL` (required): PostgreSQL connection string

use book_catalog::AppState;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;

/// CLI tool for managing book-catalog.
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
    /// Manage authors
    Author {
        #[command(subcommand)]
        action: NamedAction,
    },

    /// Manage publishers
    Publisher {
        #[command(subcommand)]
        action: NamedAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Subcommands shared by authors and publishers.
#[derive(Subcommand)]
enum NamedAction {
    /// Add a new record
    Add {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all records
    List,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Author { action } => handle_author_action(action, &pool).await?,
        Commands::Publisher { action } => handle_publisher_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches author commands.
async fn handle_author_action(action: NamedAction, pool: &PgPool) -> Result<()> {
    let state = AppState::postgres(pool.clone());

    match action {
        NamedAction::Add { name } => {
            println!("{}", "✍️  Add Author".bright_blue().bold());
            println!();

            let name = prompt_name(name, "Author name")?;
            let author = state
                .author_service
                .create_author(Some(name))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create author: {}", e))?;

            print_created(author.id, &author.name);
        }
        NamedAction::List => {
            let authors = state
                .author_service
                .list_authors()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list authors: {}", e))?;

            let rows = authors
                .into_iter()
                .map(|a| (a.id, a.name, a.created_at))
                .collect::<Vec<_>>();
            print_table("📋 Authors", "author", &rows);
        }
    }

    Ok(())
}

/// Dispatches publisher commands.
async fn handle_publisher_action(action: NamedAction, pool: &PgPool) -> Result<()> {
    let state = AppState::postgres(pool.clone());

    match action {
        NamedAction::Add { name } => {
            println!("{}", "🏢 Add Publisher".bright_blue().bold());
            println!();

            let name = prompt_name(name, "Publisher name")?;
            let publisher = state
                .publisher_service
                .create_publisher(Some(name))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create publisher: {}", e))?;

            print_created(publisher.id, &publisher.name);
        }
        NamedAction::List => {
            let publishers = state
                .publisher_service
                .list_publishers()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list publishers: {}", e))?;

            let rows = publishers
                .into_iter()
                .map(|p| (p.id, p.name, p.created_at))
                .collect::<Vec<_>>();
            print_table("📋 Publishers", "publisher", &rows);
        }
    }

    Ok(())
}

/// Uses the `--name` argument or asks for one interactively.
fn prompt_name(name: Option<String>, prompt: &str) -> Result<String> {
    match name {
        Some(n) => Ok(n),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

fn print_created(id: i64, name: &str) {
    println!();
    println!("{}", "✅ Created successfully!".green().bold());
    println!("  ID:   {}", id.to_string().bright_white().bold());
    println!("  Name: {}", name.cyan());
    println!();
}

/// Prints records as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Authors
///
///   ID  Name                           Created
///   ──────────────────────────────────────────────────────────
///   1   Jorge Luis Borges              2024-01-15 10:30
/// ```
fn print_table(title: &str, kind: &str, rows: &[(i64, String, DateTime<Utc>)]) {
    println!("{}", title.bright_blue().bold());
    println!();

    if rows.is_empty() {
        println!("{}", format!("  No {kind}s found").yellow());
        println!();
        println!(
            "  Add one with: {} admin {} add",
            "cargo run --bin".bright_cyan(),
            kind
        );
        return;
    }

    println!(
        "  {:<5} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for (id, name, created_at) in rows {
        println!(
            "  {:<5} {:<30} {}",
            id.to_string().bright_black(),
            name.cyan(),
            created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", rows.len().to_string().bright_white().bold());
    println!();
}

/// Displays catalog statistics.
///
/// Shows the number of books, authors and publishers.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let state = AppState::postgres(pool.clone());

    let (books, authors, publishers) = tokio::try_join!(
        state.book_service.count_books(),
        state.author_service.count_authors(),
        state.publisher_service.count_publishers(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to count records: {}", e))?;

    println!("  Books:      {}", books.to_string().bright_green().bold());
    println!("  Authors:    {}", authors.to_string().bright_green().bold());
    println!(
        "  Publishers: {}",
        publishers.to_string().bright_green().bold()
    );
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

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
