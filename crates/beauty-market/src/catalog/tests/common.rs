use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::domain::{
    AvailabilitySnapshot, ContactChannels, PriceRange, Professional, ProfessionalId,
    ServiceAddon, Vendor, VendorId, VendorLocation, VendorService,
};
use crate::catalog::registry::{VendorCategory, VendorDataset, VendorRegistry};
use crate::catalog::schedule::{PersonalSchedule, TimeWindow};
use crate::catalog::service::CatalogService;

pub(super) fn location(district: &str) -> VendorLocation {
    VendorLocation {
        address: format!("Av. Principal 10, {district}"),
        district: district.to_string(),
        city: "Santo Domingo".to_string(),
        distance: None,
    }
}

pub(super) fn professional(id: &str) -> Professional {
    Professional {
        id: ProfessionalId(id.to_string()),
        name: format!("Pro {id}"),
        image: None,
        rating: 4.7,
        review_count: 25,
        years_experience: 4,
        monthly_bookings: 40,
        specialties: vec!["Balayage".to_string(), "Corte".to_string()],
        recommended_addons: vec![ServiceAddon {
            id: format!("{id}-addon"),
            name: "Tratamiento de keratina".to_string(),
            price: 1250.0,
            duration: Some(20),
        }],
        bio: None,
        is_top_rated: None,
        next_available: None,
        personal_schedule: None,
    }
}

pub(super) fn weekday_schedule() -> PersonalSchedule {
    PersonalSchedule {
        working_days: [1, 2, 3, 4, 5].into_iter().collect(),
        working_hours: TimeWindow {
            start: "09:00".to_string(),
            end: "17:00".to_string(),
        },
        lunch_break: None,
        personal_blocks: None,
    }
}

pub(super) fn vendor(id: &str, professionals: Option<Vec<Professional>>) -> Vendor {
    Vendor {
        id: VendorId(id.to_string()),
        name: format!("Salon {id}"),
        slug: format!("salon-{id}"),
        description: "Servicios de belleza".to_string(),
        rating: 4.6,
        review_count: 120,
        location: location("Piantini"),
        contact: ContactChannels {
            phone: "809-555-0101".to_string(),
            email: None,
            whatsapp: None,
        },
        categories: BTreeSet::from(["hair".to_string()]),
        popular_services: Vec::new(),
        badges: Vec::new(),
        availability: AvailabilitySnapshot {
            is_open: true,
            next_slot: None,
            today_available: true,
        },
        professional_count: professionals.as_ref().map_or(0, |list| list.len() as u32),
        service_count: 1,
        price_range: PriceRange {
            min: 1000.0,
            max: 2500.0,
        },
        services: vec![VendorService {
            id: format!("{id}-svc"),
            name: "Corte y blower".to_string(),
            description: "Corte con secado".to_string(),
            price: 1500.0,
            duration: 60,
            category: "hair".to_string(),
            is_popular: Some(true),
            image: None,
            before_after: None,
            addons: None,
        }],
        professionals,
        hours: BTreeMap::new(),
        gallery: None,
    }
}

/// Two hair vendors (one without staff) and one spa vendor.
pub(super) fn dataset() -> VendorDataset {
    let mut scheduled = professional("p3");
    scheduled.personal_schedule = Some(weekday_schedule());

    VendorDataset::from_categories([
        (
            VendorCategory::Spa,
            vec![vendor("spa1", Some(vec![scheduled]))],
        ),
        (
            VendorCategory::Hair,
            vec![
                vendor("hair1", Some(vec![professional("p1"), professional("p2")])),
                vendor("hair2", None),
            ],
        ),
    ])
    .expect("fixture dataset is valid")
}

pub(super) fn build_service() -> Arc<CatalogService<VendorDataset>> {
    Arc::new(CatalogService::new(Arc::new(dataset())))
}

/// Registry that lists the same vendor under two categories.
pub(super) struct DuplicatingRegistry {
    pub(super) vendor: Vendor,
}

impl VendorRegistry for DuplicatingRegistry {
    fn list_vendors_by_category(&self, category: VendorCategory) -> Vec<Vendor> {
        match category {
            VendorCategory::Hair | VendorCategory::Mixed => vec![self.vendor.clone()],
            _ => Vec::new(),
        }
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
