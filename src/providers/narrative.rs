use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::sync::Semaphore;
use tracing::warn;

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed model identifier used for every generation call
pub const MODEL_ID: &str = "gemini-2.5-flash-lite";

/// Upper bound on generation calls in flight across all pipeline instances.
/// The provider SDK call is blocking, so each in-flight call pins one worker
/// thread.
const MAX_CONCURRENT_GENERATIONS: usize = 8;

/// Client for the generative model provider.
///
/// The underlying call is blocking and runs on the blocking worker pool,
/// gated by a semaphore so many concurrent pipelines cannot exhaust it.
#[derive(Clone, Debug)]
pub struct NarrativeClient {
    api_key: String,
    base_url: String,
    permits: Arc<Semaphore>,
}

impl NarrativeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            permits: Arc::new(Semaphore::new(MAX_CONCURRENT_GENERATIONS)),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Generate the itinerary narrative for the composed prompt.
    ///
    /// Returns the model's raw text unmodified. Failures degrade to a short
    /// `Generation error: ...` string, same policy as the other phases.
    pub async fn generate(&self, prompt: String) -> String {
        match self.request(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Generation error: {}", err);
                format!("Generation error: {}", err)
            }
        }
    }

    async fn request(&self, prompt: String) -> Result<String> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| PlannerError::Generation("generation pool closed".to_string()))?;

        let api_key = self.api_key.clone();
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            MODEL_ID
        );

        let outcome = tokio::task::spawn_blocking(move || -> Result<String> {
            let _permit = permit;

            let client = reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?;

            let response = client
                .post(&url)
                .header("x-goog-api-key", api_key)
                .json(&json!({
                    "contents": [{ "parts": [{ "text": prompt }] }]
                }))
                .send()?;

            let status = response.status();
            if !status.is_success() {
                return Err(PlannerError::Generation(format!(
                    "provider returned status {}",
                    status
                )));
            }

            let body: Value = response.json()?;
            extract_text(&body).ok_or_else(|| {
                PlannerError::Generation("response contained no candidate text".to_string())
            })
        })
        .await
        .map_err(|err| PlannerError::Generation(format!("generation task failed: {}", err)))?;

        outcome
    }
}

/// Pull the text parts out of the first candidate
fn extract_text(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
