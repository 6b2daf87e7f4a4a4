use std::io::Write;

use serde::Serialize;

use super::domain::ProfessionalWithVendor;

#[derive(Debug, Serialize)]
struct ListingRow<'a> {
    id: &'a str,
    name: &'a str,
    vendor: &'a str,
    vendor_slug: &'a str,
    district: &'a str,
    city: &'a str,
    rating: f32,
    review_count: u32,
    specialties: String,
    top_rated: bool,
}

impl<'a> From<&'a ProfessionalWithVendor> for ListingRow<'a> {
    fn from(entry: &'a ProfessionalWithVendor) -> Self {
        let professional = &entry.professional;
        Self {
            id: &professional.id.0,
            name: &professional.name,
            vendor: &entry.vendor.name,
            vendor_slug: &entry.vendor.slug,
            district: &entry.vendor.location.district,
            city: &entry.vendor.location.city,
            rating: professional.rating,
            review_count: professional.review_count,
            specialties: professional.specialties.join("; "),
            top_rated: professional.top_rated(),
        }
    }
}

/// Writes the professional listing as CSV, one row per entry, in listing order.
pub fn write_professional_listing<W: Write>(
    writer: W,
    listing: &[ProfessionalWithVendor],
) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(true).from_writer(writer);

    for entry in listing {
        csv_writer.serialize(ListingRow::from(entry))?;
    }

    csv_writer.flush()?;
    Ok(listing.len())
}
