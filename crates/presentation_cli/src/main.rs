//! CO2 trip calculator CLI
//!
//! Computes the CO2-equivalent emissions of a trip between two cities.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod validation;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::{ErrorCategory, MessagePort, TripEmissionService};
use clap::Parser;
use domain::{EmissionCatalog, TripResult};
use infrastructure::{AppConfig, DistanceAdapter, GeocodingAdapter, LogFormat, TomlMessageCatalog};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::validation::TripArgs;

const USAGE: &str =
    "Usage: co2-calculator --start <CITY> --end <CITY> --transportation-method <METHOD>";

/// CO2 trip calculator
#[derive(Parser)]
#[command(name = "co2-calculator")]
#[command(author, version, about = "Estimate the CO2-equivalent emissions of a trip", long_about = None)]
struct Cli {
    /// City the trip starts in
    #[arg(long, required_unless_present = "list_methods")]
    start: Option<String>,

    /// City the trip ends in
    #[arg(long, required_unless_present = "list_methods")]
    end: Option<String>,

    /// Transport method, e.g. diesel-car-medium
    #[arg(long, required_unless_present = "list_methods")]
    transportation_method: Option<String>,

    /// Configuration file (default: ./config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// List transport methods with their emission rates and exit
    #[arg(long)]
    list_methods: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Explicit `-v` wins over `RUST_LOG`; without either, warnings only
fn log_filter(verbose: u8, rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) if verbose == 0 && !filter.trim().is_empty() => filter,
        _ => log_filter_from_verbosity(verbose).to_string(),
    }
}

fn init_logging(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::new(log_filter(verbose, std::env::var("RUST_LOG").ok()));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Process exit code for an error category
const fn exit_code(category: ErrorCategory) -> u8 {
    match category {
        ErrorCategory::BadRequest => 2,
        ErrorCategory::Forbidden => 3,
        ErrorCategory::NotFound => 4,
        ErrorCategory::NetworkUnavailable => 5,
        ErrorCategory::InternalServerError => 1,
    }
}

fn format_result(result: &TripResult) -> String {
    format!(
        "Your trip caused {:.1}kg of CO2-equivalent.",
        result.co2_kg()
    )
}

fn format_methods(catalog: &EmissionCatalog) -> String {
    let width = catalog.methods().map(str::len).max().unwrap_or_default();
    catalog
        .entries()
        .map(|(method, rate)| format!("{method:<width$}  {rate}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wire the adapters and the catalog into the trip service
fn build_service(
    config: &AppConfig,
    catalog: Arc<EmissionCatalog>,
) -> anyhow::Result<TripEmissionService> {
    let openroute = config.openroute.to_openroute_config()?;
    let messages: Arc<dyn MessagePort> = Arc::new(
        TomlMessageCatalog::from_config(&config.messages)
            .context("failed to load message bundle")?,
    );

    let geocoder = GeocodingAdapter::from_config(&openroute, Arc::clone(&messages))?;
    let distance = DistanceAdapter::from_config(&openroute, Arc::clone(&messages))?;
    debug!(?openroute, "OpenRouteService adapters initialized");

    Ok(TripEmissionService::new(
        Arc::new(geocoder),
        Arc::new(distance),
        catalog,
        messages,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(cli.verbose, config.logging.format);

    let catalog = Arc::new(EmissionCatalog::standard());
    if cli.list_methods {
        println!("{}", format_methods(&catalog));
        return Ok(ExitCode::SUCCESS);
    }

    let args = TripArgs::new(
        cli.start.unwrap_or_default(),
        cli.end.unwrap_or_default(),
        cli.transportation_method.unwrap_or_default(),
    );
    let request = match args.into_request(&catalog) {
        Ok(request) => request,
        Err(messages) => {
            for message in messages {
                eprintln!("{message}");
            }
            eprintln!("{USAGE}");
            return Ok(ExitCode::from(exit_code(ErrorCategory::BadRequest)));
        },
    };

    config.validate()?;
    let service = build_service(&config, catalog)?;

    match service.compute_trip(&request).await {
        Ok(result) => {
            info!(
                distance_km = result.distance_km(),
                co2_kg = result.co2_kg(),
                "Trip calculated"
            );
            if cli.json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", format_result(&result));
            }
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => {
            let category = e.category();
            eprintln!("Error ({category}, {}): {}", category.status_code(), e.message());
            Ok(ExitCode::from(exit_code(category)))
        },
    }
}

#[cfg(test)]
mod tests {
    use domain::EmissionRate;

    use super::*;

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn rust_log_used_without_verbosity() {
        assert_eq!(log_filter(0, Some("infrastructure=debug".into())), "infrastructure=debug");
        assert_eq!(log_filter(0, None), "warn");
        assert_eq!(log_filter(0, Some("  ".into())), "warn");
    }

    #[test]
    fn verbosity_overrides_rust_log() {
        assert_eq!(log_filter(2, Some("error".into())), "debug");
    }

    #[test]
    fn exit_codes_are_distinct_per_category() {
        assert_eq!(exit_code(ErrorCategory::InternalServerError), 1);
        assert_eq!(exit_code(ErrorCategory::BadRequest), 2);
        assert_eq!(exit_code(ErrorCategory::Forbidden), 3);
        assert_eq!(exit_code(ErrorCategory::NotFound), 4);
        assert_eq!(exit_code(ErrorCategory::NetworkUnavailable), 5);
    }

    #[test]
    fn result_line() {
        let result = TripResult::new(36.0, EmissionRate::new(142).unwrap()).unwrap();
        assert_eq!(
            format_result(&result),
            "Your trip caused 5.1kg of CO2-equivalent."
        );
    }

    #[test]
    fn result_line_keeps_one_decimal() {
        let result = TripResult::new(0.0, EmissionRate::new(142).unwrap()).unwrap();
        assert_eq!(
            format_result(&result),
            "Your trip caused 0.0kg of CO2-equivalent."
        );
    }

    #[test]
    fn methods_listing() {
        let listing = format_methods(&EmissionCatalog::standard());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with("bus-default "));
        assert!(lines[0].ends_with("27 g/km"));
        assert!(listing.contains("plugin-hybrid-car-medium  110 g/km"));
    }

    #[test]
    fn service_shares_the_startup_catalog() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "openroute": { "api_key": "test-api-key" }
        }))
        .unwrap();
        let catalog = Arc::new(EmissionCatalog::standard());

        let service = build_service(&config, Arc::clone(&catalog)).unwrap();
        assert!(std::ptr::eq(service.catalog(), catalog.as_ref()));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn list_methods_needs_no_trip_arguments() {
        let cli = Cli::try_parse_from(["co2-calculator", "--list-methods"]).unwrap();
        assert!(cli.list_methods);
        assert!(cli.start.is_none());
    }
}
