//! trip-planner-rs: a typed pipeline that turns trip requests into composed
//! travel itineraries
//!
//! One request flows through normalization and three sequential provider
//! phases (web search, places lookup, narrative generation). Provider
//! failures degrade to descriptive text inside the result instead of failing
//! the run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{PlannerConfig, PlanningPipeline, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlannerConfig::from_env()?;
//!     let pipeline = PlanningPipeline::new(&config);
//!
//!     let request: TripRequest = serde_json::from_str(
//!         r#"{
//!             "from": "Delhi (DEL)",
//!             "to": "Mumbai (BOM)",
//!             "departureDate": "2025-10-15",
//!             "returnDate": "2025-10-18",
//!             "passengers": "2",
//!             "budget": "mid"
//!         }"#,
//!     )?;
//!
//!     let result = pipeline.plan(&request).await;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod types;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use normalize::normalize_request;
pub use pipeline::{PipelinePhase, PlanningPipeline};
pub use providers::{NarrativeClient, PlacesClient, SearchClient, MODEL_ID};
pub use types::{BudgetTier, PassengerCount, PlanResult, TripRequest, TripSpec};

#[cfg(feature = "cli")]
pub mod cli;
