//! folio CLI
//!
//! Local execution entry point for catalog builds and contact submissions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::{
    error::Result,
    models::{Config, FilterState},
    pipeline,
    services::{ContactRelay, Submission},
    storage::{CatalogStorage, LocalStorage},
    utils::http,
};

/// folio - Portfolio Project Catalog Builder
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Portfolio project catalog builder")]
struct Cli {
    /// Path to storage directory containing config and build artifacts
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the project feed, normalize it, and render the catalog page
    Build {
        /// Render only projects matching this language (default: all)
        #[arg(long)]
        language: Option<String>,
    },

    /// Re-render the page from the stored snapshot without refetching
    Render {
        /// Render only projects matching this language (default: all)
        #[arg(long)]
        language: Option<String>,
    },

    /// Submit a contact message to the mail relay
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// Validate configuration files
    Validate,

    /// Show current snapshot info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_summary(summary: &pipeline::CatalogSummary) {
    if summary.used_fallback {
        log::warn!("Feed unavailable; page built from the sample catalog");
    }
    log::info!(
        "Rendered {} of {} projects ({} stars, {} forks, {} languages)",
        summary.visible_count,
        summary.project_count,
        summary.stats.stars,
        summary.stats.forks,
        summary.stats.languages
    );
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("folio starting...");

    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    let storage = LocalStorage::new(&cli.storage_dir);

    match cli.command {
        Command::Build { language } => {
            let filter = FilterState::from_arg(language.as_deref());
            let summary = pipeline::run_build(&config, &storage, filter).await?;
            print_summary(&summary);
            log::info!("Page written to {}", storage.path("index.html").display());
        }

        Command::Render { language } => {
            let filter = FilterState::from_arg(language.as_deref());
            let summary = pipeline::run_render(&config, &storage, filter).await?;
            print_summary(&summary);
            log::info!("Page written to {}", storage.path("index.html").display());
        }

        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let client = http::create_client(&config.source)?;
            let relay = ContactRelay::new(client, config.contact.clone());
            let submission = Submission {
                name,
                email,
                subject,
                message,
            };

            match relay.send(&submission).await {
                Ok(()) => log::info!("Message sent. Response expected within 24-48 hours."),
                Err(e) => {
                    log::error!("{e}");
                    log::error!("{}", relay.fallback_instructions());
                    return Err(e);
                }
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (source, images, render, and contact sections)");

            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            match storage.load_snapshot().await? {
                Some(snapshot) => {
                    log::info!("Snapshot generated at: {}", snapshot.generated_at);
                    log::info!("Projects: {}", snapshot.count);
                    log::info!(
                        "Totals: {} stars, {} forks, {} languages",
                        snapshot.stats.stars,
                        snapshot.stats.forks,
                        snapshot.stats.languages
                    );
                    if snapshot.used_fallback {
                        log::info!("Built from the sample catalog (feed was unavailable)");
                    }
                }
                None => log::info!("No snapshot found yet."),
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
