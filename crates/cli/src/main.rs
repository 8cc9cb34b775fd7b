use clap::{Parser, Subcommand};
use notifyd_domain::config::parse_duration;
use notifyd_domain::{CliOverrides, RecordScope};
use notifyd_jobs::{JobRunner, NotificationPurgeJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "notifyd")]
#[command(version)]
#[command(about = "notifyd - notification store with capacity-based retention")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the retention jobs until interrupted (default)
    Run,

    /// Delete notifications older than the given age and exit
    Cleanup {
        /// Minimum age of deleted notifications, e.g. 7d or 12h
        #[arg(long)]
        age: String,

        /// Only delete notifications already marked processed
        #[arg(long)]
        processed: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting notifyd v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let use_cases = di::UseCases::new(&repos, &config)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Cleanup { age, processed } => {
            let age_ms = i64::try_from(parse_duration(&age)?.as_millis())?;
            let scope = if processed {
                RecordScope::Processed
            } else {
                RecordScope::All
            };

            let deleted = use_cases.cleanup_by_age.execute(scope, age_ms).await?;
            info!(deleted, scope = scope.as_str(), "Manual cleanup finished");
        }
        Command::Run => {
            let mut runner = JobRunner::new().with_shutdown_token(CancellationToken::new());

            if let Some(purge) = use_cases.purge_notifications {
                runner = runner.with_notification_purge(NotificationPurgeJob::new(purge));
            } else {
                info!("Notification retention disabled by configuration");
            }
            if let Some(purge) = use_cases.purge_processed {
                runner = runner.with_processed_purge(NotificationPurgeJob::new(purge));
            }

            let running = runner.start();

            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");

            running.shutdown().await;
        }
    }

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}
