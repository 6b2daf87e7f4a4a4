use beauty_market::catalog::{DatasetLoader, VendorDataset};
use beauty_market::config::{AppConfig, CatalogConfig};
use beauty_market::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the process-wide dataset from the configured directory, or the bundled sample.
pub(crate) fn load_dataset(config: &CatalogConfig) -> Result<VendorDataset, AppError> {
    let dataset = match config.checked_data_dir()? {
        Some(dir) => DatasetLoader::from_dir(dir)?,
        None => {
            info!("APP_CATALOG_DIR unset; serving bundled vendor dataset");
            VendorDataset::bundled()?
        }
    };
    Ok(dataset)
}

/// Resolves the catalog source for CLI commands: the flag wins over the environment.
pub(crate) fn catalog_config(data_dir: Option<PathBuf>) -> Result<CatalogConfig, AppError> {
    match data_dir {
        Some(dir) => Ok(CatalogConfig {
            data_dir: Some(dir),
        }),
        None => Ok(AppConfig::load()?.catalog),
    }
}
