use std::sync::Arc;

use alchm_alchemy::{AlchemicalDeriver, ElementalAggregator};
use alchm_kitchen::catalog::Catalog;
use alchm_kitchen::positions::PositionService;
use alchm_kitchen::routes::{self, AppState};
use alchm_recommendation::{CandidateKind, RecommendationCriteria, RecommendationRanker};
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

/// alchm-kitchen - astrological food recommendations
#[derive(Parser)]
#[command(name = "alchm-kitchen")]
#[command(about = "Elemental compatibility scoring for recipes, ingredients, cuisines, and cooking methods", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print recommendations for the current chart as JSON
    Recommend {
        /// Candidate kind: recipe, ingredient, cuisine, cooking_method
        #[arg(long, default_value = "recipe")]
        kind: CandidateKind,

        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = alchm_kitchen::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    alchm_kitchen::observability::init_observability(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Recommend { kind, limit } => recommend_command(config, kind, limit).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: alchm_kitchen::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting alchm-kitchen server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let catalog = Arc::new(Catalog::embedded()?);
    let positions = Arc::new(PositionService::new(&config.astrologize)?);
    tracing::info!(
        catalog_size = catalog.len(),
        upstream = config.astrologize.base_url.as_deref().unwrap_or("(offline)"),
        "Catalog loaded"
    );

    let state = AppState {
        config,
        positions,
        catalog,
    };
    let app = routes::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Offline recommendation run: resolve the current chart (falling back to
/// the static table when no upstream is configured), rank the catalog,
/// and print the result as JSON.
#[tracing::instrument(skip(config))]
async fn recommend_command(
    config: alchm_kitchen::config::Config,
    kind: CandidateKind,
    limit: usize,
) -> Result<()> {
    let catalog = Catalog::embedded()?;
    let positions_service = PositionService::new(&config.astrologize)?;
    let positions = positions_service.current(Utc::now()).await;
    let signs = positions.signs();

    let target = ElementalAggregator::aggregate_chart(&signs);
    let alchemical = AlchemicalDeriver::derive(&signs);
    tracing::info!(
        dominant = %target.dominant(),
        spirit = alchemical.spirit,
        essence = alchemical.essence,
        "Resolved current chart"
    );

    let mut criteria = RecommendationCriteria::for_target(target);
    criteria.limit = limit;
    let result = RecommendationRanker::rank(&catalog.by_kind(kind), &criteria);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
