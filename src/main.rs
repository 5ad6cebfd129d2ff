// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use parking_lot::RwLock;
use tower_http::trace::TraceLayer;

use crate::application::catalog_service::CatalogService;
use crate::application::chart_service::ChartService;
use crate::application::dataset_repository::DatasetRepository;
use crate::application::summary_service::SummaryService;
use crate::domain::selection::ChannelSelection;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::csv_repository::CsvDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    campaign_chart, control_catalog, follower_chart, health_check, record_card_click,
    summary_cards,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_settings()?;

    // Load the three analytics tables; without them there is nothing to
    // serve, so any load failure aborts startup.
    let repository: Arc<dyn DatasetRepository> =
        Arc::new(CsvDatasetRepository::load(&settings.data)?);

    // Create services (application layer)
    let catalog_service = CatalogService::new(repository.clone());
    let summary_service = SummaryService::new(repository.clone());
    let chart_service = ChartService::new(repository.clone());

    // Create application state
    let state = Arc::new(AppState {
        catalog_service,
        summary_service,
        chart_service,
        repository,
        selection: RwLock::new(ChannelSelection::new()),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/catalog", get(control_catalog))
        .route("/summary-cards", get(summary_cards))
        .route("/charts/campaigns", get(campaign_chart))
        .route("/charts/followers", get(follower_chart))
        .route("/cards/:channel/click", post(record_card_click))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = settings.server.listen_addr.parse()?;
    println!("Starting marketing-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
