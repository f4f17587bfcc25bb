//! Operator CLI for folio.
//!
//! Manages content and sessions directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Content counts
//! cargo run --bin admin -- stats
//!
//! # Categories
//! cargo run --bin admin -- category list
//! cargo run --bin admin -- category create "Field Notes"
//!
//! # Articles
//! cargo run --bin admin -- article list
//! cargo run --bin admin -- article publish 3
//! cargo run --bin admin -- article delete 3
//!
//! # Mint an API session token
//! cargo run --bin admin -- session issue
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `folio::config`). Every command
//! except `session issue` needs a configured database.

use folio::config::{self, Config};
use folio::server::connect_database;
use folio::state::{AppState, Store};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing folio.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show content counts
    Stats,

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage articles
    Article {
        #[command(subcommand)]
        action: ArticleAction,
    },

    /// Manage API sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
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

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories in creation order
    List,

    /// Create a category
    Create {
        /// Display name; prompted for when omitted
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum ArticleAction {
    /// List all articles, drafts included
    List,

    /// Make an article visible on the public site
    Publish { id: i64 },

    /// Hide an article from the public site
    Unpublish { id: i64 },

    /// Delete an article
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Issue a Bearer token for the JSON API
    Issue,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &connect(&config).await?).await?,
        Commands::Stats => handle_stats(&connect(&config).await?).await?,
        Commands::Category { action } => {
            let state = database_state(&config).await?;
            handle_category_action(action, &state).await?
        }
        Commands::Article { action } => {
            let state = database_state(&config).await?;
            handle_article_action(action, &state).await?
        }
        Commands::Session { action } => handle_session_action(action, &config)?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL (or DB_HOST/DB_USER) must be set")?;
    connect_database(config, url).await
}

/// Services backed by the configured database.
async fn database_state(config: &Config) -> Result<AppState> {
    let pool = connect(config).await?;
    AppState::new(Store::Postgres(Arc::new(pool)), config)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
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

/// Displays content counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    let published: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE published")
        .fetch_one(pool)
        .await?;

    let drafts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE NOT published")
        .fetch_one(pool)
        .await?;

    let links: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(jsonb_array_length(links)), 0)::BIGINT FROM bio")
            .fetch_one(pool)
            .await?;

    println!(
        "  Categories: {}",
        categories.to_string().bright_green().bold()
    );
    println!(
        "  Published:  {}",
        published.to_string().bright_green().bold()
    );
    println!("  Drafts:     {}", drafts.to_string().yellow().bold());
    println!("  Bio links:  {}", links.to_string().bright_green().bold());
    println!();

    Ok(())
}

async fn handle_category_action(action: CategoryAction, state: &AppState) -> Result<()> {
    match action {
        CategoryAction::List => {
            let categories = state.category_service.list().await?;

            if categories.is_empty() {
                println!("{}", "  No categories found".yellow());
                return Ok(());
            }

            println!(
                "  {:<4} {:<30} {:<30}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Slug".bright_white().bold()
            );
            println!("  {}", "-".repeat(66).bright_black());
            for category in &categories {
                println!(
                    "  {:<4} {:<30} {:<30}",
                    category.id.to_string().bright_black(),
                    category.name.cyan(),
                    category.slug
                );
            }
            println!();
        }
        CategoryAction::Create { name } => {
            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Category name").interact_text()?,
            };

            let category = state.category_service.create(name).await?;
            println!(
                "{} {} ({})",
                "Created category".green().bold(),
                category.name.cyan(),
                category.slug.bright_black()
            );
        }
    }

    Ok(())
}

async fn handle_article_action(action: ArticleAction, state: &AppState) -> Result<()> {
    match action {
        ArticleAction::List => {
            let articles = state.article_service.list_all().await?;

            if articles.is_empty() {
                println!("{}", "  No articles found".yellow());
                return Ok(());
            }

            println!(
                "  {:<4} {:<36} {:<16} {:<10}",
                "ID".bright_white().bold(),
                "Title".bright_white().bold(),
                "Category".bright_white().bold(),
                "Status".bright_white().bold()
            );
            println!("  {}", "-".repeat(70).bright_black());
            for article in &articles {
                let status = if article.published {
                    "PUBLISHED".green()
                } else {
                    "DRAFT".yellow()
                };
                println!(
                    "  {:<4} {:<36} {:<16} {}",
                    article.id.to_string().bright_black(),
                    article.title.cyan(),
                    article.category,
                    status
                );
            }
            println!();
            println!(
                "  Total: {}",
                articles.len().to_string().bright_white().bold()
            );
        }
        ArticleAction::Publish { id } => {
            let article = state.article_service.set_published(id, true).await?;
            println!(
                "{} /article/{}",
                "Published".green().bold(),
                article.slug.cyan()
            );
        }
        ArticleAction::Unpublish { id } => {
            let article = state.article_service.set_published(id, false).await?;
            println!("{} {}", "Unpublished".yellow().bold(), article.title.cyan());
        }
        ArticleAction::Delete { id, yes } => {
            let article = state.article_service.get(id).await?;
            println!("  Article: {}", article.title.cyan());

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this article?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            state.article_service.delete(id).await?;
            println!("{}", "Article deleted".green().bold());
        }
    }

    Ok(())
}

/// Mints a session token signed with `SESSION_SECRET`.
fn handle_session_action(action: SessionAction, config: &Config) -> Result<()> {
    match action {
        SessionAction::Issue => {
            let state = AppState::new(Store::Memory, config)?;
            let session = state.auth_service.issue();

            println!("{}", "Session issued".green().bold());
            println!(
                "  Expires: {}",
                session
                    .expires_at
                    .format("%Y-%m-%d %H:%M UTC")
                    .to_string()
                    .bright_black()
            );
            println!();
            println!("{}", "Add this to your requests:".bright_white());
            println!(
                "  {}: Bearer {}",
                "Authorization".bright_cyan(),
                session.token.bright_yellow()
            );
            println!();
        }
    }

    Ok(())
}
