use tracing::{info, warn};

use crate::config::PlannerConfig;
use crate::normalize::normalize_request;
use crate::prompt;
use crate::providers::{NarrativeClient, PlacesClient, SearchClient};
use crate::types::{PlanResult, TripRequest};

/// Stages of one pipeline run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Idle,
    Normalizing,
    Searching,
    LookingUpPlaces,
    Generating,
    Completed,
    Failed,
}

impl PipelinePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelinePhase::Idle => "idle",
            PipelinePhase::Normalizing => "normalizing",
            PipelinePhase::Searching => "searching",
            PipelinePhase::LookingUpPlaces => "looking_up_places",
            PipelinePhase::Generating => "generating",
            PipelinePhase::Completed => "completed",
            PipelinePhase::Failed => "failed",
        }
    }
}

/// Orchestrates one trip request through normalization and the three
/// sequential provider phases, aggregating everything into a [`PlanResult`].
///
/// Construct once and share across requests; each `plan` call is an isolated
/// run with no state carried between them.
#[derive(Clone, Debug)]
pub struct PlanningPipeline {
    search: SearchClient,
    places: PlacesClient,
    narrative: NarrativeClient,
}

impl PlanningPipeline {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            search: SearchClient::new(config.tavily_api_key.clone()),
            places: PlacesClient::new(config.maps_api_key.clone()),
            narrative: NarrativeClient::new(config.gemini_api_key.clone()),
        }
    }

    pub fn with_search_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.search.set_base_url(base_url);
        self
    }

    pub fn with_places_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.places.set_base_url(base_url);
        self
    }

    pub fn with_narrative_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.narrative.set_base_url(base_url);
        self
    }

    /// Run one request through the full phase sequence.
    ///
    /// Never returns an error: a normalization failure produces a
    /// `success=false` result, and provider failures are absorbed into the
    /// corresponding phase's text output.
    pub async fn plan(&self, request: &TripRequest) -> PlanResult {
        info!(
            destination = %request.destination,
            phase = PipelinePhase::Normalizing.as_str(),
            "processing trip request"
        );

        let spec = match normalize_request(request) {
            Ok(spec) => spec,
            Err(err) => {
                warn!(phase = PipelinePhase::Failed.as_str(), "{}", err);
                return PlanResult::failed(err.to_string());
            }
        };

        info!(
            origin = %spec.origin,
            destination = %spec.destination,
            duration_days = spec.duration_days,
            budget_amount = spec.budget_amount,
            passengers = spec.passenger_count,
            "request normalized"
        );

        info!(phase = PipelinePhase::Searching.as_str(), "phase started");
        let search_summary = self.search.destination_briefing(&spec).await;

        info!(
            phase = PipelinePhase::LookingUpPlaces.as_str(),
            "phase started"
        );
        let places_summary = self.places.poi_summary(&spec.destination).await;

        info!(phase = PipelinePhase::Generating.as_str(), "phase started");
        let itinerary_prompt = prompt::itinerary_prompt(&spec, &search_summary, &places_summary);
        let narrative = self.narrative.generate(itinerary_prompt).await;

        info!(phase = PipelinePhase::Completed.as_str(), "plan assembled");
        PlanResult::completed(&spec, search_summary, places_summary, narrative)
    }
}
