use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worldcup_map::api::{build_router, build_router_with_access_log, state::AppState};
use worldcup_map::config::AppConfig;
use worldcup_map::ingest::load_dataset;

#[derive(Parser)]
#[command(name = "worldcup-map")]
#[command(about = "FIFA World Cup winners dashboard with a reactive choropleth map")]
#[command(version)]
struct Cli {
    /// Path to configuration file (ignored when missing)
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// CSV file with Year, Winners and Runners-up columns
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server (default)
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,

        /// Log all HTTP requests
        #[arg(long)]
        access_log: bool,
    },

    /// Print the country summary and exit
    Summary {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting worldcup-map v{}", env!("CARGO_PKG_VERSION"));

    let dataset = load_dataset(&config.data_file)?;

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        access_log: false,
    }) {
        Commands::Serve {
            host,
            port,
            access_log,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let state = AppState::new(dataset);
            let app = if access_log {
                build_router_with_access_log(state)
            } else {
                build_router(state)
            };

            let addr = config.server.addr();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            tracing::info!("Dashboard: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Summary { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(dataset.summary())?);
            } else {
                println!("{:<20} {:>5} {:>10}", "Country", "Wins", "Runner Up");
                for row in dataset.summary().rows() {
                    println!("{:<20} {:>5} {:>10}", row.country, row.wins, row.runner_up);
                }
            }
        }
    }

    Ok(())
}
