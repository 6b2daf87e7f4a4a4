use std::path::PathBuf;

use beauty_market::catalog::{
    all_professionals, write_professional_listing, DatasetLoader, VendorCategory, VendorDataset,
};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn directory_load_matches_bundled_dataset() {
    let from_dir = DatasetLoader::from_dir(data_dir()).expect("data dir loads");
    let bundled = VendorDataset::bundled().expect("bundled loads");

    assert_eq!(from_dir.vendor_count(), bundled.vendor_count());
    for category in VendorCategory::ordered() {
        assert_eq!(from_dir.vendors(category), bundled.vendors(category));
    }
}

#[test]
fn missing_directory_yields_empty_dataset() {
    let dataset = DatasetLoader::from_dir(data_dir().join("does-not-exist"))
        .expect("missing files are not errors");
    assert!(dataset.is_empty());
    assert!(all_professionals(&dataset).is_empty());
}

#[test]
fn reader_parses_single_category_file() {
    let file = std::fs::File::open(data_dir().join("barber.json")).expect("barber file");
    let vendors = DatasetLoader::from_reader(VendorCategory::Barber, file).expect("parses");
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0].professionals().len(), 2);
    assert_eq!(vendors[0].price_range.min, 350.0);
}

#[test]
fn csv_export_writes_header_and_one_row_per_professional() {
    let dataset = VendorDataset::bundled().expect("bundled loads");
    let listing = all_professionals(&dataset);

    let mut buffer = Vec::new();
    let written = write_professional_listing(&mut buffer, &listing).expect("csv writes");
    assert_eq!(written, listing.len());

    let text = String::from_utf8(buffer).expect("utf8 csv");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,vendor,vendor_slug,district,city,rating,review_count,specialties,top_rated")
    );
    let first = lines.next().expect("first row");
    assert!(first.starts_with("p-hair-001,María Rodríguez,Salón Bella Vista,salon-bella-vista,"));
    assert!(first.contains("Balayage; Colorimetría"));
    assert!(first.ends_with(",true"));
    assert_eq!(text.lines().count(), listing.len() + 1);
}
