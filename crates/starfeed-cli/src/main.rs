mod pipeline;
mod process;
mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use starfeed_reviews::ReviewSource;

#[derive(Debug, Parser)]
#[command(name = "starfeed-cli")]
#[command(about = "starfeed review notification pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read review payloads and notify the new ones to Slack
    Process {
        /// Which provider the payloads come from
        #[arg(long, value_enum)]
        source: SourceArg,

        /// Path to a JSON payload file (a single object or an array); reads
        /// stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Emoticon marker attached to tweets upstream, e.g. ":)" or ":("
        #[arg(long)]
        marker: Option<String>,

        /// Print rendered messages without delivering or recording anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show dedup store totals and the most recently recorded keys
    Status {
        /// How many recent keys to list
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Apply pending database migrations
    Migrate,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum SourceArg {
    Trustpilot,
    FacebookRating,
    FacebookComment,
    Tweet,
}

impl From<SourceArg> for ReviewSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Trustpilot => Self::Trustpilot,
            SourceArg::FacebookRating => Self::FacebookRating,
            SourceArg::FacebookComment => Self::FacebookComment,
            SourceArg::Tweet => Self::Tweet,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("starfeed-cli: use `process`, `status`, or `migrate` (see --help)");
        return Ok(());
    };

    let config = starfeed_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = starfeed_db::PoolConfig::from_app_config(&config);
    let pool = starfeed_db::connect_pool(&config.database_url, pool_config).await?;

    match command {
        Commands::Process {
            source,
            input,
            marker,
            dry_run,
        } => {
            process::run_process(
                &pool,
                &config,
                source.into(),
                input.as_deref(),
                marker.as_deref(),
                dry_run,
            )
            .await?;
        }
        Commands::Status { limit } => status::run_status(&pool, limit).await?,
        Commands::Migrate => {
            let applied = starfeed_db::run_migrations(&pool).await?;
            println!("applied {applied} migrations");
        }
    }

    Ok(())
}
