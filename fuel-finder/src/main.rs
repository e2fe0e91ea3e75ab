use std::error::Error;

use fuel_finder::api::{ApiConfig, Deployment, StationApiClient};
use fuel_finder::domain::{Position, SearchParams};
use fuel_finder::geocode::{GeocodeConfig, NominatimClient};
use fuel_finder::search::{SearchConfig, SearchOrchestrator, SessionStatus, SortKey};
use tracing_subscriber::EnvFilter;

/// Read a numeric environment variable, warning about unparseable values.
fn env_f64(name: &str) -> Option<f64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("Warning: ignoring {name}={raw:?}, not a number");
            None
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Form state from the environment, starting from the defaults.
fn params_from_env() -> SearchParams {
    let mut params = SearchParams::default();
    if let Some(origin) = env_string("FUEL_ORIGIN") {
        params.origin = origin;
    }
    params.destination = env_string("FUEL_TO");
    if let Some(age) = env_f64("FUEL_AGE") {
        params.max_price_age_days = age;
    }
    if let Some(distance) = env_f64("FUEL_DISTANCE") {
        params.max_distance_km = distance;
    }
    if let Some(consumption) = env_f64("FUEL_CONSUMPTION") {
        params.fuel_consumption_l_per_100km = consumption;
    }
    if let Some(amount) = env_f64("FUEL_AMOUNT") {
        params.refill_amount_liters = amount;
    }
    params
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Backend location
    let deployment = Deployment::from_env_values(
        std::env::var("FUEL_ENV").ok().as_deref(),
        std::env::var("FUEL_HOST").ok().as_deref(),
    );
    let mut api_config = ApiConfig::new(&deployment);
    if let Some(url) = env_string("FUEL_API_URL") {
        api_config = api_config.with_base_url(url);
    }
    let api = StationApiClient::new(api_config)?;

    let mut geocode_config = GeocodeConfig::new();
    if let Some(url) = env_string("GEOCODE_URL") {
        geocode_config = geocode_config.with_base_url(url);
    }
    let geocoder = NominatimClient::new(geocode_config)?;

    let position = Position {
        latitude: env_f64("FUEL_LAT"),
        longitude: env_f64("FUEL_LON"),
    };

    let mut orchestrator = SearchOrchestrator::new(geocoder, api, SearchConfig::default())
        .with_params(params_from_env());

    let origin = orchestrator.resolve_location(position).await.to_string();
    if origin.is_empty() {
        eprintln!("No origin: set FUEL_ORIGIN, or FUEL_LAT and FUEL_LON.");
        return Ok(());
    }
    println!("Searching stations near {origin}...");

    let status = orchestrator.submit().await;
    if status == SessionStatus::Failed {
        let message = orchestrator.session().error().unwrap_or("unknown error");
        eprintln!("Search failed: {message}");
        return Ok(());
    }

    let amount = orchestrator.session().params().refill_amount_liters;
    let mut ranking = orchestrator.ranking();
    if ranking.is_empty() {
        println!("No stations found.");
        return Ok(());
    }

    for key in SortKey::ALL {
        ranking.set_sort_key(key);
        println!();
        println!("Sorted by lowest {key}:");
        for entry in ranking.entries() {
            let s = entry.station;
            println!(
                "  {}. {} ({})",
                entry.position, s.name, s.price_age
            );
            println!(
                "     95E10: {:.3} e/l [{}]  {amount}l (car): {:.2} e  {amount}l (gas): {:.2} e",
                s.price_per_liter,
                entry.tier.as_str(),
                s.total_price,
                s.fuel_only_price
            );
            println!("     {} km, {} min", s.distance_km, s.duration_min);
            if let Some(url) = s.directions_url(&origin) {
                println!("     {url}");
            }
        }
    }

    Ok(())
}
