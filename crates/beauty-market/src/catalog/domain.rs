use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::schedule::PersonalSchedule;

/// Identifier wrapper for vendors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VendorId(pub String);

/// Identifier wrapper for professionals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfessionalId(pub String);

/// A beauty business offering services and employing professionals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub rating: f32,
    pub review_count: u32,
    pub location: VendorLocation,
    pub contact: ContactChannels,
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub popular_services: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    pub availability: AvailabilitySnapshot,
    pub professional_count: u32,
    pub service_count: u32,
    pub price_range: PriceRange,
    pub services: Vec<VendorService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professionals: Option<Vec<Professional>>,
    #[serde(default)]
    pub hours: BTreeMap<DayOfWeek, BusinessHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

impl Vendor {
    /// Professionals declared by the vendor; absent and empty lists look the same.
    pub fn professionals(&self) -> &[Professional] {
        self.professionals.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorLocation {
    pub address: String,
    pub district: String,
    pub city: String,
    /// Kilometres from the shopper, when the listing was distance-ranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannels {
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// Point-in-time availability shown on vendor cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySnapshot {
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_slot: Option<String>,
    pub today_available: bool,
}

/// Cheapest and most expensive service, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub open: String,
    pub close: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
}

impl BusinessHours {
    pub fn closed(&self) -> bool {
        self.is_closed.unwrap_or(false)
    }
}

/// A bookable offering. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_after: Option<BeforeAfter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<ServiceAddon>>,
}

impl VendorService {
    pub fn addons(&self) -> &[ServiceAddon] {
        self.addons.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeforeAfter {
    pub before: String,
    pub after: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAddon {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// An individual provider working for exactly one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: f32,
    pub review_count: u32,
    pub years_experience: u32,
    pub monthly_bookings: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub recommended_addons: Vec<ServiceAddon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_top_rated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_schedule: Option<PersonalSchedule>,
}

impl Professional {
    pub fn top_rated(&self) -> bool {
        self.is_top_rated.unwrap_or(false)
    }
}

/// The vendor fields copied onto each aggregated professional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRef {
    pub name: String,
    pub slug: String,
    pub location: VendorLocation,
}

impl From<&Vendor> for VendorRef {
    fn from(vendor: &Vendor) -> Self {
        Self {
            name: vendor.name.clone(),
            slug: vendor.slug.clone(),
            location: vendor.location.clone(),
        }
    }
}

/// Read projection pairing a professional with a snapshot of its vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalWithVendor {
    #[serde(flatten)]
    pub professional: Professional,
    pub vendor: VendorRef,
}

/// Weekday keyed the way schedules index it: 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ordered().get(usize::from(index)).copied()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered().into_iter().find(|day| {
            day.label().eq_ignore_ascii_case(value) || day.label()[..3].eq_ignore_ascii_case(value)
        })
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}
