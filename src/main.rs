use alu_quote::config::RateDefaults;
use alu_quote::error::QfResult;
use alu_quote::rates::{RateResolver, RawRates};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Aluminum window price quotation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rate-store export (.csv with key,value[,label] or a flat .json object)
    #[arg(global = true, short, long)]
    rates: Option<String>,

    /// JSON file with rate defaults; explicit --default-* flags still win
    #[arg(global = true, long)]
    defaults: Option<String>,

    #[command(flatten)]
    rate_defaults: RateDefaults,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a single window
    Quote(cmd::quote::QuoteArgs),
    /// Show the resolved rate table
    Rates(cmd::rates::RatesArgs),
    /// Price every window listed in a CSV file
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> QfResult<()> {
    let defaults = match &cli.defaults {
        Some(path) => {
            info!("⚙️  Loading rate defaults from: {}", path);
            let mut file_defaults = RateDefaults::load_from_file(path)?;
            file_defaults.merge_from_cli(&cli.rate_defaults, matches);
            file_defaults
        }
        None => cli.rate_defaults.clone(),
    };

    let raw = match &cli.rates {
        Some(path) => RawRates::load_from_file(path)?,
        None => {
            warn!("⚠️  No rate file given. Using seed rates.");
            RawRates::from_pairs(defaults.seed_rates())
        }
    };

    let resolver = RateResolver::new(defaults);

    match cli.command {
        Commands::Quote(args) => cmd::quote::run(args, &raw, &resolver),
        Commands::Rates(args) => cmd::rates::run(args, &raw, &resolver),
        Commands::Batch(args) => cmd::batch::run(args, &raw, &resolver),
    }
}
