//! Catalog core for the beauty-services marketplace.
//!
//! Vendors are grouped by category and loaded once into an immutable
//! [`catalog::VendorDataset`]. The aggregator flattens that dataset into a
//! single professional listing, and [`pricing`] renders amounts as `RD$`
//! display strings.

pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;
