use std::collections::HashSet;

use tracing::warn;

use super::super::domain::{Professional, ServiceAddon, Vendor};
use super::super::registry::VendorDataset;
use super::super::schedule::{parse_time, PersonalSchedule, TimeWindow};

/// Dataset content that breaks a catalog invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("vendor {vendor} has price range min {min} above max {max}")]
    InvertedPriceRange { vendor: String, min: f64, max: f64 },
    #[error("vendor {vendor} lists {item} with invalid price {price}")]
    InvalidPrice {
        vendor: String,
        item: String,
        price: f64,
    },
    #[error("{subject} has invalid rating {rating}")]
    InvalidRating { subject: String, rating: f32 },
    #[error("vendor {vendor} lists service {service} with a zero-minute duration")]
    ZeroDuration { vendor: String, service: String },
    #[error("professional {professional} works on day {day}; expected 0-6")]
    InvalidWorkingDay { professional: String, day: u8 },
    #[error("professional {professional} has malformed time '{value}'; expected HH:MM")]
    InvalidTime { professional: String, value: String },
    #[error("vendor {field} '{value}' appears more than once")]
    DuplicateVendor { field: &'static str, value: String },
    #[error("professional id '{id}' appears more than once")]
    DuplicateProfessional { id: String },
}

pub(crate) fn validate_dataset(dataset: &VendorDataset) -> Result<(), ValidationError> {
    let mut vendor_ids = HashSet::new();
    let mut vendor_slugs = HashSet::new();
    let mut professional_ids = HashSet::new();

    for (category, vendor) in dataset.iter() {
        if !vendor_ids.insert(vendor.id.0.as_str()) {
            warn!(category = category.slug(), vendor = %vendor.id.0, "duplicate vendor id");
            return Err(ValidationError::DuplicateVendor {
                field: "id",
                value: vendor.id.0.clone(),
            });
        }
        if !vendor_slugs.insert(vendor.slug.as_str()) {
            warn!(category = category.slug(), slug = %vendor.slug, "duplicate vendor slug");
            return Err(ValidationError::DuplicateVendor {
                field: "slug",
                value: vendor.slug.clone(),
            });
        }

        validate_vendor(vendor)?;

        for professional in vendor.professionals() {
            if !professional_ids.insert(professional.id.0.as_str()) {
                return Err(ValidationError::DuplicateProfessional {
                    id: professional.id.0.clone(),
                });
            }
        }
    }

    Ok(())
}

pub(crate) fn validate_vendor(vendor: &Vendor) -> Result<(), ValidationError> {
    check_rating(format!("vendor {}", vendor.slug), vendor.rating)?;

    let range = vendor.price_range;
    check_price(vendor, "price range minimum", range.min)?;
    check_price(vendor, "price range maximum", range.max)?;
    if range.min > range.max {
        return Err(ValidationError::InvertedPriceRange {
            vendor: vendor.slug.clone(),
            min: range.min,
            max: range.max,
        });
    }

    for service in &vendor.services {
        check_price(vendor, &format!("service {}", service.id), service.price)?;
        if service.duration == 0 {
            return Err(ValidationError::ZeroDuration {
                vendor: vendor.slug.clone(),
                service: service.id.clone(),
            });
        }
        check_addons(vendor, service.addons())?;
    }

    for professional in vendor.professionals() {
        check_rating(
            format!("professional {}", professional.id.0),
            professional.rating,
        )?;
        check_addons(vendor, &professional.recommended_addons)?;
        if let Some(schedule) = &professional.personal_schedule {
            validate_schedule(professional, schedule)?;
        }
    }

    Ok(())
}

fn check_addons(vendor: &Vendor, addons: &[ServiceAddon]) -> Result<(), ValidationError> {
    for addon in addons {
        check_price(vendor, &format!("addon {}", addon.id), addon.price)?;
    }
    Ok(())
}

fn check_price(vendor: &Vendor, item: &str, price: f64) -> Result<(), ValidationError> {
    if price.is_finite() && price >= 0.0 {
        return Ok(());
    }

    Err(ValidationError::InvalidPrice {
        vendor: vendor.slug.clone(),
        item: item.to_string(),
        price,
    })
}

fn check_rating(subject: String, rating: f32) -> Result<(), ValidationError> {
    if rating.is_finite() && rating >= 0.0 {
        return Ok(());
    }

    Err(ValidationError::InvalidRating { subject, rating })
}

fn validate_schedule(
    professional: &Professional,
    schedule: &PersonalSchedule,
) -> Result<(), ValidationError> {
    let days = schedule
        .working_days
        .iter()
        .copied()
        .chain(schedule.blocks().iter().map(|block| block.day));
    for day in days {
        if day > 6 {
            return Err(ValidationError::InvalidWorkingDay {
                professional: professional.id.0.clone(),
                day,
            });
        }
    }

    let mut windows = vec![schedule.working_hours.clone()];
    windows.extend(schedule.lunch_break.clone());
    windows.extend(schedule.blocks().iter().map(|block| block.window()));

    for TimeWindow { start, end } in windows {
        for value in [start, end] {
            if parse_time(&value).is_none() {
                return Err(ValidationError::InvalidTime {
                    professional: professional.id.0.clone(),
                    value,
                });
            }
        }
    }

    Ok(())
}
