use tracing::debug;

use super::domain::{ProfessionalWithVendor, Vendor, VendorRef};
use super::registry::{VendorCategory, VendorRegistry};

/// Every vendor, categories concatenated in priority order.
pub fn vendors_in_priority_order<R>(registry: &R) -> Vec<Vendor>
where
    R: VendorRegistry + ?Sized,
{
    VendorCategory::ordered()
        .into_iter()
        .flat_map(|category| registry.list_vendors_by_category(category))
        .collect()
}

/// Flattens all professionals across categories, each tagged with a copy of
/// its vendor's name, slug and location.
///
/// Order follows category priority, then vendor order, then professional
/// order. Vendors without professionals contribute nothing. The registry is
/// trusted to list each vendor once.
pub fn all_professionals<R>(registry: &R) -> Vec<ProfessionalWithVendor>
where
    R: VendorRegistry + ?Sized,
{
    let vendors = vendors_in_priority_order(registry);
    let mut listing = Vec::new();

    for vendor in &vendors {
        let professionals = vendor.professionals();
        if professionals.is_empty() {
            continue;
        }

        listing.extend(professionals.iter().map(|professional| ProfessionalWithVendor {
            professional: professional.clone(),
            vendor: VendorRef::from(vendor),
        }));
    }

    debug!(
        vendors = vendors.len(),
        professionals = listing.len(),
        "aggregated professional listing"
    );
    listing
}
