mod validation;

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::domain::Vendor;
use super::registry::{VendorCategory, VendorDataset};

pub use validation::ValidationError;
pub(crate) use validation::validate_dataset;

const BUNDLED: [(VendorCategory, &str); 7] = [
    (VendorCategory::Hair, include_str!("../../../data/hair.json")),
    (VendorCategory::Nails, include_str!("../../../data/nails.json")),
    (VendorCategory::Makeup, include_str!("../../../data/makeup.json")),
    (VendorCategory::Spa, include_str!("../../../data/spa.json")),
    (VendorCategory::Lashes, include_str!("../../../data/lashes.json")),
    (VendorCategory::Barber, include_str!("../../../data/barber.json")),
    (VendorCategory::Mixed, include_str!("../../../data/mixed.json")),
];

#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Json {
        category: VendorCategory,
        source: serde_json::Error,
    },
    Invalid(ValidationError),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "failed to read vendor dataset {}: {}", path, source)
            }
            DatasetError::Json { category, source } => write!(
                f,
                "invalid vendor JSON for category {}: {}",
                category.slug(),
                source
            ),
            DatasetError::Invalid(err) => write!(f, "vendor dataset rejected: {}", err),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Json { source, .. } => Some(source),
            DatasetError::Invalid(err) => Some(err),
        }
    }
}

impl From<ValidationError> for DatasetError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

/// Reads per-category JSON vendor files into a [`VendorDataset`].
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads `<slug>.json` for each category. Missing files leave the category empty.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<VendorDataset, DatasetError> {
        let dir = dir.as_ref();
        let mut categories = Vec::new();

        for category in VendorCategory::ordered() {
            let path = dir.join(format!("{}.json", category.slug()));
            if !path.is_file() {
                debug!(category = category.slug(), path = %path.display(), "no dataset file");
                continue;
            }

            let file = std::fs::File::open(&path).map_err(|source| DatasetError::Io {
                path: path.display().to_string(),
                source,
            })?;
            categories.push((category, Self::from_reader(category, file)?));
        }

        let dataset = VendorDataset::from_categories(categories)?;
        info!(
            dir = %dir.display(),
            vendors = dataset.vendor_count(),
            "vendor dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses one category file: a JSON array of vendors.
    pub fn from_reader<R: Read>(
        category: VendorCategory,
        reader: R,
    ) -> Result<Vec<Vendor>, DatasetError> {
        serde_json::from_reader(reader).map_err(|source| DatasetError::Json { category, source })
    }

    pub fn from_str(category: VendorCategory, raw: &str) -> Result<Vec<Vendor>, DatasetError> {
        serde_json::from_str(raw).map_err(|source| DatasetError::Json { category, source })
    }
}

impl VendorDataset {
    /// The sample catalog compiled into the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        let categories = BUNDLED
            .iter()
            .map(|(category, raw)| Ok((*category, DatasetLoader::from_str(*category, raw)?)))
            .collect::<Result<Vec<_>, DatasetError>>()?;

        let dataset = VendorDataset::from_categories(categories)?;
        debug!(vendors = dataset.vendor_count(), "bundled vendor dataset ready");
        Ok(dataset)
    }
}
