use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::Vendor;
use super::loader::{validate_dataset, ValidationError};

/// Category partitions of the vendor catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorCategory {
    Hair,
    Nails,
    Makeup,
    Spa,
    Lashes,
    Barber,
    Mixed,
}

impl VendorCategory {
    /// Priority order used whenever categories are concatenated.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Hair,
            Self::Nails,
            Self::Makeup,
            Self::Spa,
            Self::Lashes,
            Self::Barber,
            Self::Mixed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hair => "Hair",
            Self::Nails => "Nails",
            Self::Makeup => "Makeup",
            Self::Spa => "Spa & Wellness",
            Self::Lashes => "Lashes & Brows",
            Self::Barber => "Barber",
            Self::Mixed => "Full Service",
        }
    }

    /// File stem and URL segment for the category.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Nails => "nails",
            Self::Makeup => "makeup",
            Self::Spa => "spa",
            Self::Lashes => "lashes",
            Self::Barber => "barber",
            Self::Mixed => "mixed",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(value))
    }
}

/// Source of category-partitioned vendor lists.
pub trait VendorRegistry: Send + Sync {
    /// Vendors of one category, in the order the source declares them.
    fn list_vendors_by_category(&self, category: VendorCategory) -> Vec<Vendor>;
}

/// Immutable, validated vendor catalog built once at startup and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct VendorDataset {
    categories: BTreeMap<VendorCategory, Vec<Vendor>>,
}

impl VendorDataset {
    /// Builds a dataset after checking every vendor invariant.
    pub fn from_categories<I>(categories: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (VendorCategory, Vec<Vendor>)>,
    {
        let mut merged: BTreeMap<VendorCategory, Vec<Vendor>> = BTreeMap::new();
        for (category, vendors) in categories {
            merged.entry(category).or_default().extend(vendors);
        }

        let dataset = Self { categories: merged };
        validate_dataset(&dataset)?;
        Ok(dataset)
    }

    pub fn vendors(&self, category: VendorCategory) -> &[Vendor] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Category and vendor pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (VendorCategory, &Vendor)> + '_ {
        VendorCategory::ordered().into_iter().flat_map(move |category| {
            self.vendors(category)
                .iter()
                .map(move |vendor| (category, vendor))
        })
    }

    pub fn vendor_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vendor_count() == 0
    }
}

impl VendorRegistry for VendorDataset {
    fn list_vendors_by_category(&self, category: VendorCategory) -> Vec<Vendor> {
        self.vendors(category).to_vec()
    }
}
