use super::common::*;
use std::sync::Arc;

use chrono::NaiveTime;

use crate::catalog::aggregator::all_professionals;
use crate::catalog::domain::{DayOfWeek, ProfessionalId};
use crate::catalog::registry::VendorCategory;
use crate::catalog::service::{CatalogError, CatalogService};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

#[test]
fn listing_follows_category_priority_then_vendor_order() {
    let service = build_service();
    let ids: Vec<String> = service
        .professionals()
        .into_iter()
        .map(|entry| entry.professional.id.0)
        .collect();
    assert_eq!(ids, ["p1", "p2", "p3"]);
}

#[test]
fn professional_lookup_carries_vendor_snapshot() {
    let service = build_service();
    let entry = service
        .professional(&ProfessionalId("p3".to_string()))
        .expect("p3 exists");
    assert_eq!(entry.vendor.slug, "salon-spa1");
    assert_eq!(entry.vendor.name, "Salon spa1");
    assert_eq!(entry.vendor.location, location("Piantini"));

    let err = service
        .professional(&ProfessionalId("ghost".to_string()))
        .expect_err("unknown id");
    assert!(matches!(err, CatalogError::ProfessionalNotFound(id) if id == "ghost"));
}

#[test]
fn vendor_lookup_searches_every_category() {
    let service = build_service();
    assert_eq!(
        service.vendor("salon-spa1").expect("spa vendor").id.0,
        "spa1"
    );
    assert!(matches!(
        service.vendor("salon-missing"),
        Err(CatalogError::VendorNotFound(_))
    ));
    assert_eq!(service.vendors(VendorCategory::Hair).len(), 2);
    assert!(service.vendors(VendorCategory::Barber).is_empty());
}

#[test]
fn availability_only_includes_scheduled_professionals() {
    let service = build_service();

    let monday = service.available_professionals(DayOfWeek::Monday, at(10, 0));
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].professional.id.0, "p3");

    assert!(service
        .available_professionals(DayOfWeek::Sunday, at(10, 0))
        .is_empty());
    assert!(service
        .available_professionals(DayOfWeek::Monday, at(17, 0))
        .is_empty());
}

#[test]
fn aggregator_trusts_registry_not_to_repeat_vendors() {
    let registry = DuplicatingRegistry {
        vendor: vendor("dup", Some(vec![professional("p9")])),
    };
    let listing = all_professionals(&registry);
    assert_eq!(listing.len(), 2);
    assert!(listing.iter().all(|entry| entry.professional.id.0 == "p9"));

    let service = CatalogService::new(Arc::new(registry));
    assert_eq!(service.professionals().len(), 2);
}
