use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::prompt;
use crate::types::TripSpec;

const DEFAULT_BASE_URL: &str = "https://api.tavily.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RESULTS: usize = 10;
const TOP_RESULTS: usize = 5;

/// Client for the web search/answer provider (Tavily-shaped API)
#[derive(Clone, Debug)]
pub struct SearchClient {
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    answer: String,
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    title: Option<String>,
    content: Option<String>,
    url: Option<String>,
}

impl SearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Research the destination for the searching phase.
    ///
    /// Never fails: transport errors, non-success statuses, and malformed
    /// payloads are degraded to a short `Search error: ...` string that takes
    /// the place of the normal output.
    pub async fn destination_briefing(&self, spec: &TripSpec) -> String {
        match self.fetch(spec).await {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!("Search provider error: {}", err);
                format!("Search error: {}", err)
            }
        }
    }

    async fn fetch(&self, spec: &TripSpec) -> Result<String> {
        let query = prompt::search_query(&spec.destination, spec.passenger_count);
        let payload = json!({
            "api_key": self.api_key,
            "query": query,
            "search_depth": "advanced",
            "include_answer": true,
            "max_results": MAX_RESULTS,
        });

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client
            .post(format!("{}/search", self.base_url.trim_end_matches('/')))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::Search(format!(
                "provider returned status {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(format_briefing(&body))
    }
}

fn format_briefing(response: &SearchResponse) -> String {
    let mut formatted = format!("Search Answer: {}\n\n", response.answer);
    formatted.push_str("Top Results:\n");

    for (i, result) in response.results.iter().take(TOP_RESULTS).enumerate() {
        formatted.push_str(&format!(
            "\n{}. {}\n",
            i + 1,
            result.title.as_deref().unwrap_or("N/A")
        ));
        formatted.push_str(&format!(
            "   {}\n",
            result.content.as_deref().unwrap_or("N/A")
        ));
        formatted.push_str(&format!(
            "   Source: {}\n",
            result.url.as_deref().unwrap_or("N/A")
        ));
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_briefing_caps_results_at_five() {
        let response = SearchResponse {
            answer: "Mumbai is the financial capital.".to_string(),
            results: (1..=8)
                .map(|i| SearchResult {
                    title: Some(format!("Result {}", i)),
                    content: Some(format!("Content {}", i)),
                    url: Some(format!("https://example.com/{}", i)),
                })
                .collect(),
        };

        let formatted = format_briefing(&response);
        assert!(formatted.starts_with("Search Answer: Mumbai is the financial capital."));
        assert!(formatted.contains("5. Result 5"));
        assert!(!formatted.contains("6. Result 6"));
        assert!(formatted.contains("Source: https://example.com/1"));
    }

    #[test]
    fn test_format_briefing_handles_missing_fields() {
        let response = SearchResponse {
            answer: String::new(),
            results: vec![SearchResult {
                title: None,
                content: None,
                url: None,
            }],
        };

        let formatted = format_briefing(&response);
        assert!(formatted.contains("1. N/A"));
        assert!(formatted.contains("Source: N/A"));
    }
}
