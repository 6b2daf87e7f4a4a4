use crate::listing::{
    run_price_format, run_price_parse, run_professionals, run_vendor, PriceFormatArgs,
    PriceParseArgs, ProfessionalsArgs, VendorArgs,
};
use crate::server;
use beauty_market::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Beauty Market Catalog",
    about = "Serve and inspect the beauty-services vendor catalog",
    version
)]
struct Cli {
    /// Directory holding <category>.json vendor files (overrides APP_CATALOG_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List every professional across all vendor categories
    Professionals(ProfessionalsArgs),
    /// Show a vendor with formatted prices
    Vendor(VendorArgs),
    /// Format or parse RD$ price labels
    Price {
        #[command(subcommand)]
        command: PriceCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PriceCommand {
    /// Render an amount, or a range when --max is given
    Format(PriceFormatArgs),
    /// Read the amount back out of a label such as "RD$1,234.50"
    Parse(PriceParseArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, data_dir).await,
        Command::Professionals(args) => run_professionals(args, data_dir),
        Command::Vendor(args) => run_vendor(args, data_dir),
        Command::Price {
            command: PriceCommand::Format(args),
        } => {
            run_price_format(args);
            Ok(())
        }
        Command::Price {
            command: PriceCommand::Parse(args),
        } => run_price_parse(args),
    }
}
