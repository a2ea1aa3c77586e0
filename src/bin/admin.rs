//! CLI administration tool for golink-store.
//!
//! Manages links and click stats directly against the database file, without
//! going through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Register or replace a link
//! cargo run --bin golink-admin -- link save wiki https://wiki.example.com --owner foo@bar.com
//!
//! # Show a link under any spelling
//! cargo run --bin golink-admin -- link get WIKI
//!
//! # Record clicks and show stats
//! cargo run --bin golink-admin -- stats record wiki 3
//! cargo run --bin golink-admin -- stats show
//!
//! # Export and restore every link as JSON
//! cargo run --bin golink-admin -- snapshot export links.json
//! cargo run --bin golink-admin -- snapshot import links.json
//! ```
//!
//! # Environment Variables
//!
//! See [`golink_store::config`]. `DATABASE_PATH` selects the database file.

use golink_store::prelude::*;
use golink_store::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;

/// CLI tool for managing golink-store.
#[derive(Parser)]
#[command(name = "golink-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database file (overrides `DATABASE_PATH`)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Manage click stats
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },

    /// Export or restore all links as JSON
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Register a link, replacing any link with the same canonical name
    Save {
        short: String,
        long: String,

        /// Owner identity stored verbatim
        #[arg(short, long, default_value = "")]
        owner: String,
    },

    /// Show a single link
    Get { short: String },

    /// List all links
    List,

    /// List links owned exactly by OWNER
    Owner { owner: String },

    /// Delete a link (click stats are kept)
    Delete {
        short: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Click stats subcommands.
#[derive(Subcommand)]
enum StatsAction {
    /// Show all click counters
    Show,

    /// Add clicks to a counter
    Record { short: String, clicks: u64 },

    /// Delete a counter (the link is kept)
    Delete { short: String },
}

/// Snapshot subcommands.
#[derive(Subcommand)]
enum SnapshotAction {
    /// Write every link to FILE
    Export { file: PathBuf },

    /// Save every link from FILE in one transaction
    Import {
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check that the database opens and migrations apply
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = StoreConfig::from_env()?;
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    config.validate()?;

    telemetry::init_tracing(&config.log_level, &config.log_format)?;

    let store = Store::connect(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.database_path.display()))?;

    let result = match cli.command {
        Commands::Link { action } => handle_link_action(action, &store).await,
        Commands::Stats { action } => handle_stats_action(action, &store).await,
        Commands::Snapshot { action } => handle_snapshot_action(action, &store).await,
        Commands::Db { action } => handle_db_action(action, &config).await,
    };

    store.close().await;
    result
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, store: &Store) -> Result<()> {
    match action {
        LinkAction::Save { short, long, owner } => {
            store.save(&Link::new(short.as_str(), long, owner)).await?;
            println!("{} {}", "✅ Saved".green().bold(), short.cyan());
        }
        LinkAction::Get { short } => match store.load(&short).await {
            Ok(link) => print_links(&[link]),
            Err(e) if e.is_not_found() => {
                println!("{} {}", "❌ No link registered for".red(), short.cyan());
            }
            Err(e) => return Err(e.into()),
        },
        LinkAction::List => {
            let mut links = store.load_all().await?;
            links.sort_by(|a, b| a.short.cmp(&b.short));
            print_links(&links);
        }
        LinkAction::Owner { owner } => {
            let links = store.get_links_by_owner(&owner).await?;
            print_links(&links);
        }
        LinkAction::Delete { short, yes } => {
            if !yes
                && !Confirm::new()
                    .with_prompt(format!("Delete link '{short}'?"))
                    .default(false)
                    .interact()?
            {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            store.delete(&short).await?;
            println!("{} {}", "✅ Deleted".green().bold(), short.cyan());
        }
    }

    Ok(())
}

/// Prints links as a table.
///
/// ```text
///   Short                Owner                Edited            Long
///   ──────────────────────────────────────────────────────────────────────
///   B-c                  foo@bar.com          2024-01-15 10:30  https://example.com
/// ```
fn print_links(links: &[Link]) {
    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return;
    }

    println!(
        "  {:<20} {:<20} {:<17} {}",
        "Short".bright_white().bold(),
        "Owner".bright_white().bold(),
        "Edited".bright_white().bold(),
        "Long".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in links {
        println!(
            "  {:<20} {:<20} {:<17} {}",
            link.short.cyan(),
            link.owner,
            link.last_edit
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
}

/// Dispatches click stats commands.
async fn handle_stats_action(action: StatsAction, store: &Store) -> Result<()> {
    match action {
        StatsAction::Show => {
            println!("{}", "📊 Click stats".bright_blue().bold());
            println!();

            let mut stats: Vec<_> = store.load_stats().await?.into_iter().collect();
            if stats.is_empty() {
                println!("{}", "  No clicks recorded".yellow());
                return Ok(());
            }

            stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (short, clicks) in &stats {
                println!(
                    "  {:<30} {}",
                    short.cyan(),
                    clicks.to_string().bright_green().bold()
                );
            }
        }
        StatsAction::Record { short, clicks } => {
            store
                .save_stats(&ClickStats::from([(short.clone(), clicks)]))
                .await?;
            println!(
                "{} {} click(s) for {}",
                "✅ Recorded".green().bold(),
                clicks,
                short.cyan()
            );
        }
        StatsAction::Delete { short } => {
            store.delete_stats(&short).await?;
            println!("{} {}", "✅ Deleted stats for".green().bold(), short.cyan());
        }
    }

    Ok(())
}

/// Dispatches snapshot commands.
async fn handle_snapshot_action(action: SnapshotAction, store: &Store) -> Result<()> {
    match action {
        SnapshotAction::Export { file } => {
            let links = store.links().snapshot().await?;
            let json = serde_json::to_string_pretty(&links)?;
            std::fs::write(&file, json)
                .with_context(|| format!("Failed to write {}", file.display()))?;

            println!(
                "{} {} link(s) to {}",
                "✅ Exported".green().bold(),
                links.len(),
                file.display()
            );
        }
        SnapshotAction::Import { file, yes } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let links: Vec<Link> = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a link snapshot", file.display()))?;

            if !yes
                && !Confirm::new()
                    .with_prompt(format!(
                        "Save {} link(s), replacing links with the same names?",
                        links.len()
                    ))
                    .default(true)
                    .interact()?
            {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            store.links().restore(&links).await?;
            println!("{} {} link(s)", "✅ Imported".green().bold(), links.len());
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, config: &StoreConfig) -> Result<()> {
    match action {
        DbAction::Check => {
            config.print_summary();
            println!(
                "{} {}",
                "✅ Database OK:".green().bold(),
                config.database_path.display()
            );
        }
    }

    Ok(())
}
