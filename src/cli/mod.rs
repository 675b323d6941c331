use anyhow::Context;
use clap::{Arg, Command};
use tracing::{error, info};

use crate::types::PassengerCount;
use crate::{PlannerConfig, PlanningPipeline, TripRequest};

/// CLI entry point for the trip-planner tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("Compose a travel itinerary from search, places, and LLM providers")
        .arg(
            Arg::new("request")
                .short('r')
                .long("request")
                .value_name("FILE")
                .help("Path to a JSON trip request file (overrides inline flags)"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("CITY")
                .help("Origin city or airport"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("CITY")
                .help("Destination city or airport"),
        )
        .arg(
            Arg::new("departure")
                .short('d')
                .long("departure")
                .value_name("DATE")
                .help("Departure date (ISO-8601, e.g. 2025-10-15)"),
        )
        .arg(
            Arg::new("return")
                .short('R')
                .long("return")
                .value_name("DATE")
                .help("Return date (ISO-8601)"),
        )
        .arg(
            Arg::new("passengers")
                .short('p')
                .long("passengers")
                .value_name("COUNT")
                .help("Number of travelers")
                .default_value("1"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("TIER")
                .help("Budget tier: budget, mid, premium, or luxury")
                .default_value("mid"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the full plan as a plain-text report to this file"),
        )
        .get_matches();

    let request = match matches.get_one::<String>("request") {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file {}", path))?;
            serde_json::from_str::<TripRequest>(&raw)
                .with_context(|| format!("Invalid trip request in {}", path))?
        }
        None => request_from_flags(&matches)?,
    };

    let config = PlannerConfig::from_env().context(
        "Provider credentials are required. Set TAVILY_API_KEY, GOOGLE_MAPS_API_KEY, and GEMINI_API_KEY",
    )?;
    let pipeline = PlanningPipeline::new(&config);

    info!(
        "Planning trip: {} -> {}",
        request.origin, request.destination
    );

    let result = pipeline.plan(&request).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        error!(
            "Planning failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
        std::process::exit(1);
    }

    if let Some(path) = matches.get_one::<String>("output") {
        std::fs::write(path, result.render_report())
            .with_context(|| format!("Failed to write plan to {}", path))?;
        info!("Full plan saved to {}", path);
    }

    Ok(())
}

fn request_from_flags(matches: &clap::ArgMatches) -> anyhow::Result<TripRequest> {
    let origin = matches
        .get_one::<String>("from")
        .cloned()
        .context("--from is required when no request file is given")?;
    let destination = matches
        .get_one::<String>("to")
        .cloned()
        .context("--to is required when no request file is given")?;

    Ok(TripRequest {
        origin,
        destination,
        departure_date: matches.get_one::<String>("departure").cloned(),
        return_date: matches.get_one::<String>("return").cloned(),
        passengers: matches
            .get_one::<String>("passengers")
            .cloned()
            .map(PassengerCount::Text),
        budget: matches.get_one::<String>("budget").cloned(),
        travel_class: None,
        trip_type: None,
    })
}
