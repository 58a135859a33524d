//! CLI administration tool for linknote.
//!
//! Provides commands for managing accounts, inspecting a user's links,
//! exporting backups and performing database operations without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply the schema
//! cargo run --bin admin -- db init
//!
//! # Create an account and get a bearer token for it
//! cargo run --bin admin -- user create
//! cargo run --bin admin -- user token alice
//!
//! # Show a user's links
//! cargo run --bin admin -- links alice --search rust --sort title
//!
//! # Back up a user's links to linknote-backup-YYYY-MM-DD.json
//! cargo run --bin admin -- export alice
//!
//! # View statistics
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` (required): PostgreSQL connection
//! - `AUTH_SIGNING_SECRET` (required for `user token`)
//! - `AUTH_TOKEN_TTL_SECONDS` (optional, default 7 days)

use linknote::api::dto::link::{LinkItem, ListLinksQuery};
use linknote::application::services::{AccountRequest, AuthService, LinkService, UserService};
use linknote::client::{self, ClientState};
use linknote::config::{self, Config};
use linknote::infrastructure::persistence::{PgLinkRepository, PgUserRepository, run_migrations};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing linknote.
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show a user's links
    Links {
        username: String,

        /// Case-insensitive substring over title, description, url and category
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// newest, oldest or title
        #[arg(long)]
        sort: Option<String>,

        /// Render cards as escaped HTML fragments
        #[arg(long)]
        html: bool,

        /// Preview the edit request for this link id
        #[arg(long)]
        edit: Option<i64>,
    },

    /// Export a user's links to a JSON backup
    Export {
        username: String,

        /// Output path (default: linknote-backup-YYYY-MM-DD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Delete an account and all its links
    Delete { username: String },

    /// Verify a password and issue a bearer token
    Token { username: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Apply the schema
    Init,

    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Links {
            username,
            search,
            category,
            sort,
            html,
            edit,
        } => {
            let query = ListLinksQuery {
                search,
                category,
                sort_by: sort,
            };
            show_links(&pool, &username, query, html, edit).await?
        }
        Commands::Export { username, output } => export_links(&pool, &username, output).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn user_service(pool: &PgPool) -> UserService<PgUserRepository> {
    UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))))
}

fn link_service(pool: &PgPool) -> LinkService<PgLinkRepository> {
    LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let users = user_service(pool);

    match action {
        UserAction::Create {
            username,
            email,
            yes,
        } => create_user(&users, username, email, yes).await?,
        UserAction::List => list_users(&users).await?,
        UserAction::Delete { username } => delete_user(&users, &username).await?,
        UserAction::Token { username } => issue_token(&users, &username).await?,
    }

    Ok(())
}

/// Creates an account with interactive prompts.
///
/// The password is always prompted for, with confirmation, and never
/// accepted as an argument.
async fn create_user(
    users: &UserService<PgUserRepository>,
    username: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Email:    {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = users
        .create_user(AccountRequest {
            username,
            email,
            password,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ User created:".green().bold(),
        format!("{} (id {})", user.username, user.id).bright_white()
    );
    println!();
    println!(
        "  Get a token with: {} admin -- user token {}",
        "cargo run --bin".bright_cyan(),
        user.username
    );
    println!();

    Ok(())
}

/// Lists all accounts with their link counts.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username             Email                          Links  Created
///   ───────────────────────────────────────────────────────────────────────────
///   1   alice                alice@example.com              12     2025-01-15 10:30
/// ```
async fn list_users(users: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let summaries = users
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if summaries.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<30} {:<6} {}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Links".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for summary in &summaries {
        let user = &summary.user;
        println!(
            "  {:<3} {:<20} {:<30} {:<6} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            summary.link_count.to_string().bright_green(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        summaries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes an account after confirmation. Its links go with it.
async fn delete_user(users: &UserService<PgUserRepository>, username: &str) -> Result<()> {
    println!("{}", "🗑️  Delete User".bright_blue().bold());
    println!();

    let user = users
        .get_user(username)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  User:  {}", user.username.cyan());
    println!("  Email: {}", user.email.bright_black());
    println!();
    println!(
        "{}",
        "⚠️  All of this user's links will be deleted too."
            .red()
            .bold()
    );
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this user?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    users
        .delete_user(username)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!();
    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

/// Checks the user's password and prints a freshly signed bearer token.
async fn issue_token(users: &UserService<PgUserRepository>, username: &str) -> Result<()> {
    println!("{}", "🔑 Issue Token".bright_blue().bold());
    println!();

    let config = config::load_from_env()?;
    let auth = AuthService::new(config.auth_signing_secret.clone(), config.token_ttl()?);

    let password = Password::new().with_prompt("Password").interact()?;

    let user = users
        .authenticate(username, &password)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let token = auth
        .issue(user.id)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!();
    println!("  Token: {}", token.bright_yellow().bold());
    println!(
        "  Valid for {} hours",
        (config.auth_token_ttl_seconds / 3600)
            .to_string()
            .bright_white()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:5000/api/links",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Fetches a user's links through the same filter path the API uses.
async fn fetch_links(
    pool: &PgPool,
    username: &str,
    query: ListLinksQuery,
) -> Result<Vec<LinkItem>> {
    let user = user_service(pool)
        .get_user(username)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let links = link_service(pool)
        .list_links(user.id, &query.into_filter())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load links: {}", e))?;

    Ok(links.into_iter().map(LinkItem::from).collect())
}

/// Renders a user's links as text cards, or HTML fragments with `--html`.
///
/// With `--edit <id>` the link is loaded into the edit form and the request
/// that saving it would send is shown.
async fn show_links(
    pool: &PgPool,
    username: &str,
    query: ListLinksQuery,
    html: bool,
    edit: Option<i64>,
) -> Result<()> {
    println!(
        "{} {}",
        "🔖 Links for".bright_blue().bold(),
        username.cyan().bold()
    );

    let query_string = query.to_query_string();
    if !query_string.is_empty() {
        println!("  {}", format!("?{query_string}").bright_black());
    }
    println!();

    let mut state = ClientState::default();
    state.replace_links(fetch_links(pool, username, query).await?);

    if html {
        for link in state.links() {
            println!("{}", client::render_link_card_html(link));
        }
        println!();
        println!("{}", client::link_count_label(state.links().len()));
    } else {
        print!("{}", client::render_links(&state));
    }
    println!();

    if let Some(id) = edit {
        state
            .begin_edit(id)
            .with_context(|| format!("Link {id} is not in this list"))?;

        if let Some(form) = client::render_edit_form(&state) {
            println!("{}", "✏️  Edit preview".bright_blue().bold());
            print!("  {form}");
            println!();
        }
    }

    Ok(())
}

/// Writes a pretty JSON backup of every link the user owns.
async fn export_links(pool: &PgPool, username: &str, output: Option<PathBuf>) -> Result<()> {
    println!("{}", "📦 Export Links".bright_blue().bold());
    println!();

    let links = fetch_links(pool, username, ListLinksQuery::default()).await?;
    let json = client::export_json(&links)?;

    let path = output.unwrap_or_else(|| {
        PathBuf::from(client::export_file_name(chrono::Utc::now().date_naive()))
    });

    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} {} to {}",
        "✅ Exported".green().bold(),
        client::link_count_label(links.len()).bright_white(),
        path.display().to_string().cyan()
    );
    println!();

    Ok(())
}

/// Displays account and link totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let categories_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(DISTINCT category) FROM links WHERE category IS NOT NULL",
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Users:      {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Links:      {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Categories: {}",
        categories_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database setup and diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Init => {
            println!("{}", "🛠️  Initializing database...".bright_blue());

            run_migrations(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
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
