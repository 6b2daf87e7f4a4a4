//! Vendor catalog: schema, registry, loading, aggregation and read views.

pub mod aggregator;
pub mod domain;
pub mod export;
mod loader;
pub mod registry;
pub mod router;
pub mod schedule;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use aggregator::{all_professionals, vendors_in_priority_order};
pub use domain::{
    AvailabilitySnapshot, BeforeAfter, BusinessHours, ContactChannels, DayOfWeek, PriceRange,
    Professional, ProfessionalId, ProfessionalWithVendor, ServiceAddon, Vendor, VendorId,
    VendorLocation, VendorRef, VendorService,
};
pub use export::write_professional_listing;
pub use loader::{DatasetError, DatasetLoader, ValidationError};
pub use registry::{VendorCategory, VendorDataset, VendorRegistry};
pub use router::catalog_router;
pub use schedule::{PersonalSchedule, PersonalTimeBlock, TimeWindow};
pub use service::{CatalogError, CatalogService};
pub use views::{AddonView, ProfessionalCardView, ServiceView, VendorSummaryView};
