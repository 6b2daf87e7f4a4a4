use crate::cli::ServeArgs;
use crate::infra::{catalog_config, load_dataset, AppState};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use beauty_market::catalog::CatalogService;
use beauty_market::config::AppConfig;
use beauty_market::error::AppError;
use beauty_market::telemetry;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs, data_dir: Option<PathBuf>) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if data_dir.is_some() {
        config.catalog = catalog_config(data_dir)?;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let dataset = Arc::new(load_dataset(&config.catalog)?);
    info!(vendors = dataset.vendor_count(), "vendor catalog loaded");
    let catalog_service = Arc::new(CatalogService::new(dataset));

    let app = with_catalog_routes(catalog_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "beauty market catalog ready");

    axum::serve(listener, app).await?;
    Ok(())
}
