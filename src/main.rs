mod app_state;
mod config;
mod models;
mod routes;
mod services;

use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use app_state::AppState;
use config::AppConfig;
use services::docintel::DocIntelClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing invoice-relay server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!("invoice_requests_total", "Total invoice uploads received");
    metrics::describe_counter!(
        "invoice_analyses_succeeded",
        "Total analyses that produced mapped invoices"
    );
    metrics::describe_counter!(
        "invoice_analyses_failed",
        "Total analyses that ended in an error response"
    );
    metrics::describe_histogram!(
        "invoice_analysis_seconds",
        "End-to-end time from upload to mapped result"
    );
    metrics::describe_histogram!(
        "invoice_poll_attempts",
        "Status checks needed to reach a terminal operation status"
    );

    // Initialize the Document Intelligence client
    tracing::info!(
        model_id = %config.model_id,
        api_version = %config.api_version,
        "Initializing Document Intelligence client"
    );
    let analyzer = DocIntelClient::new(
        &config.azure_endpoint,
        config.azure_key.clone(),
        config.model_id.clone(),
        config.api_version.clone(),
    )
    .expect("Failed to initialize Document Intelligence client");

    // Create shared application state
    let state = AppState::new(
        Arc::new(analyzer),
        config.poll_policy(),
        config.mapping_settings(),
    );

    // Build API routes
    let app = routes::router(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024)); // 10 MB limit

    tracing::info!("Starting invoice-relay on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
