use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trip::TripSpec;

/// Final outcome of one pipeline run, success or failure.
///
/// Owned exclusively by the request that produced it and never mutated after
/// the pipeline returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub places_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl PlanResult {
    /// Assemble a successful result from the trip spec and the three phase outputs
    pub fn completed(
        spec: &TripSpec,
        search_summary: String,
        places_summary: String,
        narrative: String,
    ) -> Self {
        Self {
            success: true,
            destination: Some(spec.destination.clone()),
            origin: Some(spec.origin.clone()),
            duration_days: Some(spec.duration_days),
            budget_amount: Some(spec.budget_amount),
            passenger_count: Some(spec.passenger_count),
            search_summary: Some(search_summary),
            places_summary: Some(places_summary),
            narrative: Some(narrative),
            error: None,
            generated_at: Utc::now(),
        }
    }

    /// Build a failure result carrying a human-readable message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            destination: None,
            origin: None,
            duration_days: None,
            budget_amount: None,
            passenger_count: None,
            search_summary: None,
            places_summary: None,
            narrative: None,
            error: Some(message.into()),
            generated_at: Utc::now(),
        }
    }

    /// Render the banner-delimited plain-text report saved by the CLI
    pub fn render_report(&self) -> String {
        let banner = "=".repeat(80);
        let mut lines = Vec::new();

        lines.push("COMPREHENSIVE TRAVEL PLAN".to_string());
        lines.push(format!("{}\n", banner));
        lines.push(self.narrative.clone().unwrap_or_default());
        lines.push(format!("\n{}", banner));
        lines.push("SEARCH RESULTS".to_string());
        lines.push(format!("{}\n", banner));
        lines.push(self.search_summary.clone().unwrap_or_default());
        lines.push(format!("\n{}", banner));
        lines.push("MAPS RESULTS".to_string());
        lines.push(format!("{}\n", banner));
        lines.push(self.places_summary.clone().unwrap_or_default());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::trip::BudgetTier;

    fn sample_spec() -> TripSpec {
        TripSpec {
            origin: "Delhi DEL".to_string(),
            destination: "Mumbai BOM".to_string(),
            departure_date: None,
            return_date: None,
            duration_days: 3,
            budget_tier: BudgetTier::Mid,
            budget_amount: 25_000,
            passenger_count: 2,
        }
    }

    #[test]
    fn test_completed_result_serialization() {
        let result = PlanResult::completed(
            &sample_spec(),
            "search".to_string(),
            "places".to_string(),
            "plan".to_string(),
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["destination"], "Mumbai BOM");
        assert_eq!(json["budget_amount"], 25_000);
        assert!(json.get("error").is_none());
        assert!(json.get("generated_at").is_some());
    }

    #[test]
    fn test_failed_result_omits_trip_fields() {
        let result = PlanResult::failed("bad input");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "bad input");
        assert!(json.get("destination").is_none());
        assert!(json.get("narrative").is_none());
    }

    #[test]
    fn test_render_report_sections() {
        let result = PlanResult::completed(
            &sample_spec(),
            "the search block".to_string(),
            "the places block".to_string(),
            "the plan body".to_string(),
        );
        let report = result.render_report();

        assert!(report.starts_with("COMPREHENSIVE TRAVEL PLAN"));
        assert!(report.contains("SEARCH RESULTS"));
        assert!(report.contains("MAPS RESULTS"));
        assert!(report.contains("the plan body"));
    }
}
