use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ecotrip_lib::{
    calculate_all_modes, calculate_carbon_credits, calculate_emission, calculate_saving,
    estimate_credit_price, CreditConfig, FactorTable, RouteCatalog, BASELINE_MODE,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trip carbon-emission estimator")]
struct Cli {
    /// Override the route catalog with a JSON file.
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Override the emission-factor table with a JSON file.
    #[arg(long)]
    factors: Option<PathBuf>,

    /// Override the carbon-credit configuration with a JSON file.
    #[arg(long)]
    credits_config: Option<PathBuf>,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every known location in the route catalog.
    Locations,
    /// Look up the distance between two locations.
    Distance {
        /// Origin location name.
        #[arg(long)]
        from: String,
        /// Destination location name.
        #[arg(long)]
        to: String,
    },
    /// Estimate emission, savings, and offset cost for one trip.
    Emission {
        /// Transport mode (must be present in the factor table).
        #[arg(long)]
        mode: String,
        #[command(flatten)]
        trip: TripArgs,
    },
    /// Rank every transport mode by emission for a trip.
    Compare {
        #[command(flatten)]
        trip: TripArgs,
    },
    /// Convert an emission mass into carbon credits and a price range.
    Credits {
        /// Emission in kg CO₂.
        #[arg(long)]
        emission_kg: f64,
    },
}

/// Trip selection: either a catalog lookup (`--from`/`--to`) or a manual
/// distance (`--distance`), mirroring the manual-entry fallback of the
/// original form.
#[derive(Args, Debug)]
struct TripArgs {
    /// Origin location name (requires --to).
    #[arg(long, requires = "to", conflicts_with = "distance")]
    from: Option<String>,

    /// Destination location name (requires --from).
    #[arg(long, requires = "from", conflicts_with = "distance")]
    to: Option<String>,

    /// Manual distance in kilometers.
    #[arg(long)]
    distance: Option<f64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = load_catalog(cli.routes.as_deref())?;
    let factors = load_factors(cli.factors.as_deref())?;
    let credits = load_credit_config(cli.credits_config.as_deref())?;

    match &cli.command {
        Command::Locations => handle_locations(&catalog, cli.json),
        Command::Distance { from, to } => handle_distance(&catalog, from, to, cli.json),
        Command::Emission { mode, trip } => {
            let distance = resolve_trip(&catalog, trip)?;
            handle_emission(&factors, &credits, distance, mode, cli.json)
        }
        Command::Compare { trip } => {
            let distance = resolve_trip(&catalog, trip)?;
            handle_compare(&factors, distance, cli.json)
        }
        Command::Credits { emission_kg } => handle_credits(&credits, *emission_kg, cli.json),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<RouteCatalog> {
    match path {
        Some(path) => RouteCatalog::from_path(path)
            .with_context(|| format!("failed to load route catalog from {}", path.display())),
        None => Ok(RouteCatalog::builtin().clone()),
    }
}

fn load_factors(path: Option<&Path>) -> Result<FactorTable> {
    match path {
        Some(path) => FactorTable::from_path(path)
            .with_context(|| format!("failed to load factor table from {}", path.display())),
        None => Ok(FactorTable::builtin()),
    }
}

fn load_credit_config(path: Option<&Path>) -> Result<CreditConfig> {
    match path {
        Some(path) => CreditConfig::from_path(path).with_context(|| {
            format!("failed to load credit configuration from {}", path.display())
        }),
        None => Ok(CreditConfig::default()),
    }
}

/// Resolve the trip distance from the catalog or take the manual value.
fn resolve_trip(catalog: &RouteCatalog, trip: &TripArgs) -> Result<f64> {
    if let Some(distance) = trip.distance {
        return Ok(distance);
    }
    match (&trip.from, &trip.to) {
        (Some(from), Some(to)) => Ok(catalog.resolve_distance(from, to)?),
        _ => bail!("provide either --from/--to or --distance"),
    }
}

fn handle_locations(catalog: &RouteCatalog, json: bool) -> Result<()> {
    let locations = catalog.all_locations();
    if json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }
    for location in locations {
        println!("{location}");
    }
    Ok(())
}

fn handle_distance(catalog: &RouteCatalog, from: &str, to: &str, json: bool) -> Result<()> {
    let km = catalog.resolve_distance(from, to)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "from": from, "to": to, "distanceKm": km }))?
        );
    } else {
        println!("{from} - {to}: {km} km");
    }
    Ok(())
}

fn handle_emission(
    factors: &FactorTable,
    credits: &CreditConfig,
    distance_km: f64,
    mode: &str,
    json: bool,
) -> Result<()> {
    let emission = calculate_emission(factors, distance_km, mode);
    let baseline = calculate_emission(factors, distance_km, BASELINE_MODE);
    let saving = calculate_saving(emission, baseline);
    let credit_amount = calculate_carbon_credits(credits, emission)?;
    let estimate = estimate_credit_price(credits, credit_amount)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "mode": mode,
                "distanceKm": distance_km,
                "emissionKg": emission,
                "saving": saving,
                "offset": estimate,
            }))?
        );
        return Ok(());
    }

    println!("Trip: {distance_km} km by {mode}");
    println!("Emission: {emission:.2} kg CO2");
    match saving.percentage {
        Some(percentage) => println!(
            "Versus {BASELINE_MODE}: {:.2} kg saved ({percentage:.2}%)",
            saving.saved_kg
        ),
        None => println!("Versus {BASELINE_MODE}: no baseline emission to compare against"),
    }
    println!(
        "Offset: {:.4} credits, estimated {:.2} - {:.2} (avg {:.2})",
        estimate.credits, estimate.price_min, estimate.price_max, estimate.price_average
    );
    Ok(())
}

fn handle_compare(factors: &FactorTable, distance_km: f64, json: bool) -> Result<()> {
    let ranked = calculate_all_modes(factors, distance_km);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    println!("Emissions for {distance_km} km (baseline: {BASELINE_MODE}):");
    for entry in ranked {
        match entry.percentage_vs_baseline {
            Some(percentage) => println!(
                "- {}: {:.2} kg CO2 ({percentage:.2}% of {BASELINE_MODE})",
                entry.mode, entry.emission_kg
            ),
            None => println!("- {}: {:.2} kg CO2", entry.mode, entry.emission_kg),
        }
    }
    Ok(())
}

fn handle_credits(credits: &CreditConfig, emission_kg: f64, json: bool) -> Result<()> {
    let credit_amount = calculate_carbon_credits(credits, emission_kg)?;
    let estimate = estimate_credit_price(credits, credit_amount)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!("{emission_kg} kg CO2 = {credit_amount:.4} carbon credits");
    println!(
        "Estimated offset cost: {:.2} - {:.2} (avg {:.2})",
        estimate.price_min, estimate.price_max, estimate.price_average
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
