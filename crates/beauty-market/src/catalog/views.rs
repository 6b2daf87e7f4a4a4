use serde::Serialize;

use super::domain::{ProfessionalWithVendor, ServiceAddon, Vendor, VendorService};
use crate::pricing::{format_price, format_price_range};

#[derive(Debug, Clone, Serialize)]
pub struct AddonView {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub price_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl From<&ServiceAddon> for AddonView {
    fn from(addon: &ServiceAddon) -> Self {
        Self {
            id: addon.id.clone(),
            name: addon.name.clone(),
            price: addon.price,
            price_label: format_price(addon.price),
            duration_minutes: addon.duration,
        }
    }
}

/// Card payload for a professional in the cross-vendor listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalCardView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: f32,
    pub review_count: u32,
    pub years_experience: u32,
    pub specialties: Vec<String>,
    pub top_rated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available: Option<String>,
    pub vendor_name: String,
    pub vendor_slug: String,
    pub district: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_addons: Vec<AddonView>,
}

impl From<&ProfessionalWithVendor> for ProfessionalCardView {
    fn from(entry: &ProfessionalWithVendor) -> Self {
        let professional = &entry.professional;
        Self {
            id: professional.id.0.clone(),
            name: professional.name.clone(),
            image: professional.image.clone(),
            rating: professional.rating,
            review_count: professional.review_count,
            years_experience: professional.years_experience,
            specialties: professional.specialties.clone(),
            top_rated: professional.top_rated(),
            next_available: professional.next_available.clone(),
            vendor_name: entry.vendor.name.clone(),
            vendor_slug: entry.vendor.slug.clone(),
            district: entry.vendor.location.district.clone(),
            city: entry.vendor.location.city.clone(),
            recommended_addons: professional
                .recommended_addons
                .iter()
                .map(AddonView::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub price_label: String,
    pub duration_minutes: u32,
    pub popular: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<AddonView>,
}

impl From<&VendorService> for ServiceView {
    fn from(service: &VendorService) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            category: service.category.clone(),
            price: service.price,
            price_label: format_price(service.price),
            duration_minutes: service.duration,
            popular: service.is_popular.unwrap_or(false),
            addons: service.addons().iter().map(AddonView::from).collect(),
        }
    }
}

/// Vendor detail payload with display-ready prices.
#[derive(Debug, Clone, Serialize)]
pub struct VendorSummaryView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub rating: f32,
    pub review_count: u32,
    pub address: String,
    pub district: String,
    pub city: String,
    pub phone: String,
    pub is_open: bool,
    pub price_range_label: String,
    pub professional_count: u32,
    pub services: Vec<ServiceView>,
}

impl From<&Vendor> for VendorSummaryView {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.0.clone(),
            name: vendor.name.clone(),
            slug: vendor.slug.clone(),
            rating: vendor.rating,
            review_count: vendor.review_count,
            address: vendor.location.address.clone(),
            district: vendor.location.district.clone(),
            city: vendor.location.city.clone(),
            phone: vendor.contact.phone.clone(),
            is_open: vendor.availability.is_open,
            price_range_label: format_price_range(vendor.price_range.min, vendor.price_range.max),
            professional_count: vendor.professional_count,
            services: vendor.services.iter().map(ServiceView::from).collect(),
        }
    }
}
