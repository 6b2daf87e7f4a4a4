use crate::infra::{catalog_config, load_dataset};
use beauty_market::catalog::{
    write_professional_listing, CatalogService, ProfessionalCardView, VendorSummaryView,
};
use beauty_market::error::AppError;
use beauty_market::pricing::{format_price, format_price_range, parse_price};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ProfessionalsArgs {
    /// Print the listing as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
    /// Also write the listing to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct VendorArgs {
    /// Vendor slug, e.g. salon-bella-vista
    pub(crate) slug: String,
}

#[derive(Args, Debug)]
pub(crate) struct PriceFormatArgs {
    /// Amount in pesos
    #[arg(allow_negative_numbers = true)]
    pub(crate) amount: f64,
    /// Upper bound; renders "min - max"
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) max: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct PriceParseArgs {
    /// Label to read, e.g. "RD$1,234.50"
    pub(crate) text: String,
}

pub(crate) fn run_professionals(
    args: ProfessionalsArgs,
    data_dir: Option<PathBuf>,
) -> Result<(), AppError> {
    let dataset = load_dataset(&catalog_config(data_dir)?)?;
    let service = CatalogService::new(Arc::new(dataset));
    let listing = service.professionals();

    if let Some(path) = args.csv {
        let file = std::fs::File::create(&path)?;
        let written = write_professional_listing(file, &listing)?;
        eprintln!("Wrote {} professionals to {}", written, path.display());
    }

    if args.json {
        match serde_json::to_string_pretty(&listing) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Listing unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    println!("Professionals ({})", listing.len());
    for entry in &listing {
        let card = ProfessionalCardView::from(entry);
        let marker = if card.top_rated { " *" } else { "" };
        println!(
            "- {}{} | {:.1} ({} reviews) | {} - {}, {}",
            card.name,
            marker,
            card.rating,
            card.review_count,
            card.vendor_name,
            card.district,
            card.city
        );
        if !card.specialties.is_empty() {
            println!("    specialties: {}", card.specialties.join(", "));
        }
        for addon in &card.recommended_addons {
            println!("    + {} {}", addon.name, addon.price_label);
        }
    }

    Ok(())
}

pub(crate) fn run_vendor(args: VendorArgs, data_dir: Option<PathBuf>) -> Result<(), AppError> {
    let dataset = load_dataset(&catalog_config(data_dir)?)?;
    let service = CatalogService::new(Arc::new(dataset));

    let vendor = service.vendor(&args.slug)?;
    let view = VendorSummaryView::from(&vendor);

    println!("{} ({})", view.name, view.slug);
    println!("{}, {}, {}", view.address, view.district, view.city);
    println!(
        "Rating {:.1} from {} reviews | {} | {}",
        view.rating,
        view.review_count,
        if view.is_open { "open now" } else { "closed" },
        view.price_range_label
    );
    println!("Services:");
    for service in &view.services {
        println!(
            "  - {} {} ({} min)",
            service.name, service.price_label, service.duration_minutes
        );
        for addon in &service.addons {
            println!("      + {} {}", addon.name, addon.price_label);
        }
    }

    Ok(())
}

pub(crate) fn run_price_format(args: PriceFormatArgs) {
    let label = match args.max {
        Some(max) => format_price_range(args.amount, max),
        None => format_price(args.amount),
    };
    println!("{label}");
}

pub(crate) fn run_price_parse(args: PriceParseArgs) -> Result<(), AppError> {
    let amount = parse_price(&args.text)?;
    println!("{amount}");
    Ok(())
}
