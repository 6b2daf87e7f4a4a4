use std::sync::Arc;

use chrono::NaiveTime;

use super::aggregator::all_professionals;
use super::domain::{DayOfWeek, ProfessionalId, ProfessionalWithVendor, Vendor};
use super::registry::{VendorCategory, VendorRegistry};

/// Read-side entry point over a vendor registry.
pub struct CatalogService<R> {
    registry: Arc<R>,
}

impl<R> CatalogService<R>
where
    R: VendorRegistry + 'static,
{
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The full cross-category professional listing.
    pub fn professionals(&self) -> Vec<ProfessionalWithVendor> {
        all_professionals(self.registry.as_ref())
    }

    pub fn professional(
        &self,
        id: &ProfessionalId,
    ) -> Result<ProfessionalWithVendor, CatalogError> {
        self.professionals()
            .into_iter()
            .find(|entry| &entry.professional.id == id)
            .ok_or_else(|| CatalogError::ProfessionalNotFound(id.0.clone()))
    }

    pub fn vendor(&self, slug: &str) -> Result<Vendor, CatalogError> {
        VendorCategory::ordered()
            .into_iter()
            .flat_map(|category| self.registry.list_vendors_by_category(category))
            .find(|vendor| vendor.slug == slug)
            .ok_or_else(|| CatalogError::VendorNotFound(slug.to_string()))
    }

    pub fn vendors(&self, category: VendorCategory) -> Vec<Vendor> {
        self.registry.list_vendors_by_category(category)
    }

    /// Professionals whose schedule admits a booking at `at` on `day`.
    ///
    /// Professionals without a personal schedule are left out.
    pub fn available_professionals(
        &self,
        day: DayOfWeek,
        at: NaiveTime,
    ) -> Vec<ProfessionalWithVendor> {
        self.professionals()
            .into_iter()
            .filter(|entry| {
                entry
                    .professional
                    .personal_schedule
                    .as_ref()
                    .is_some_and(|schedule| schedule.is_available(day, at))
            })
            .collect()
    }
}

/// Lookup failures raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("professional {0} not found")]
    ProfessionalNotFound(String),
    #[error("vendor {0} not found")]
    VendorNotFound(String),
    #[error("unknown vendor category {0}")]
    UnknownCategory(String),
}
