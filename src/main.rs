//! SkillForge application entry point.
//!
//! Parses command line arguments, loads configuration from a TOML file,
//! initializes tracing, loads the recommendation table (degrading instead of
//! exiting when the load fails), sets up the Axum router, and starts the HTTP
//! server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skillforge::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use skillforge::http::server::start_server;
use skillforge::routes::create_router;
use skillforge::state::AppState;
use skillforge::table::{RecommendationTable, TableState};
use skillforge::templates::init_templates;

/// SkillForge: HTTP lookup service for member training recommendations
#[derive(Parser, Debug)]
#[command(name = "skillforge", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "skillforge=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging.format);

    tracing::info!(config = %args.config, "Loaded configuration");

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Load the recommendation table once. A failed load does not abort the
    // process: the service starts degraded and answers 503 until restarted.
    let csv_path = config.table.csv_path();
    let table = match RecommendationTable::load(&csv_path) {
        Ok(table) => {
            tracing::info!(path = %csv_path, rows = table.len(), "Loaded recommendation table");
            TableState::Available(table)
        }
        Err(err) => {
            tracing::error!(path = %csv_path, error = %err, "Failed to load recommendation table, serving degraded");
            TableState::Degraded(err.to_string())
        }
    };

    // Create application state and router
    let state = AppState::new(config.clone(), tera, table);
    let app = create_router(state);

    // Start server
    start_server(app, &config).await?;

    Ok(())
}

fn init_tracing(filter: &str, format: &str) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));
    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
