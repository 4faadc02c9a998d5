use anyhow::{Context, Result};
use chrono::{Datelike, Timelike, Utc};
use clap::Parser;
use hfprop::config::HfPropConfig;
use hfprop::geo::{Gazetteer, GeoLocator, ParseOutcome};
use hfprop::logging::init_logging;
use hfprop::models::LocationResult;
use hfprop::propagation::{BandPlan, PathGeometry, PropagationModel};
use hfprop::report::{Report, render_report};
use hfprop::solar::{HamQslFeed, JsonFileStore, SolarDataProvider, TerminalPrompter};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "hfprop", version)]
#[command(about = "Estimate HF band conditions between two locations", long_about = None)]
struct Args {
    /// Origin: grid square, "lat, lon", DMS, US state or country
    from: String,

    /// Destination, same formats as the origin
    to: String,

    /// UTC hour to predict for (defaults to now)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    hour: Option<u32>,

    /// Month to predict for, 1-12 (defaults to now)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Never prompt for solar values
    #[arg(long)]
    non_interactive: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let mut config = HfPropConfig::load_from_path(args.config.clone())?;
    if args.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging)?;
    debug!(?config, "Configuration loaded");

    let gazetteer = Gazetteer::builtin()?;
    let locator = GeoLocator::new(gazetteer).with_precision(config.defaults.precision()?);

    let (Some(from), Some(to)) = (
        locate(&locator, &args.from),
        locate(&locator, &args.to),
    ) else {
        return Ok(ExitCode::from(2));
    };

    let path = PathGeometry::between(&from.coordinate, &to.coordinate);
    info!(
        from = %from.description,
        to = %to.description,
        distance_km = path.distance_km,
        "Path resolved"
    );

    let feed = HamQslFeed::new(config.solar.feed_url.clone(), config.solar.timeout())
        .context("Failed to set up solar feed client")?;
    let store = JsonFileStore::new(config.cache.snapshot_path());
    let prompter = TerminalPrompter::new();

    let interactive =
        config.solar.interactive && !args.non_interactive && std::io::stdin().is_terminal();
    let provider = SolarDataProvider::new(&feed, &store);
    let provider = if interactive {
        provider.with_prompter(&prompter)
    } else {
        provider
    };
    let solar = provider.acquire();

    let now = Utc::now();
    let hour_utc = args.hour.unwrap_or_else(|| now.hour());
    let month = args.month.unwrap_or_else(|| now.month());

    let model = PropagationModel::new(BandPlan::hf_amateur());
    let forecast = model.forecast(&path, &solar.snapshot, hour_utc, month);

    println!(
        "{}",
        render_report(&Report {
            from: &from,
            to: &to,
            path: &path,
            solar: &solar,
            forecast: &forecast,
            hour_utc,
            month,
        })
    );

    Ok(ExitCode::SUCCESS)
}

fn locate(locator: &GeoLocator, text: &str) -> Option<LocationResult> {
    match locator.parse_location(text) {
        ParseOutcome::Located(location) => Some(location),
        outcome @ ParseOutcome::Unparseable { .. } => {
            eprintln!("{outcome}");
            None
        }
    }
}
