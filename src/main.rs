use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

use nutrio::config::Config;

/// nutrio - onboarding and daily nutrition calendar
#[derive(Parser)]
#[command(name = "nutrio")]
#[command(about = "Nutrition onboarding flow and daily completion calendar", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and run migrations
    Migrate,
    /// Inspect and walk the onboarding flow
    Onboarding {
        #[command(subcommand)]
        command: cli::onboarding::Command,
    },
    /// Render the week slider or a month of the date picker
    Calendar {
        #[command(subcommand)]
        command: cli::calendar::Command,
    },
    /// Device user identity
    User {
        #[command(subcommand)]
        command: cli::user::Command,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nutrio::observability::init_observability(
        "nutrio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Onboarding { command } => cli::onboarding::run(config, command).await,
        Commands::Calendar { command } => cli::calendar::run(config, command),
        Commands::User { command } => cli::user::run(config, command).await,
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = nutrio::create_pool(&config.database.url, 1).await?;
    nutrio::run_migrations(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
