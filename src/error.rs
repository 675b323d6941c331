use thiserror::Error;

/// Main error type for the planning pipeline
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Normalization error: {0}")]
    Normalization(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Search provider error: {0}")]
    Search(String),

    #[error("Places provider error: {0}")]
    Places(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Normalization(_) => "NORMALIZATION_ERROR",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Search(_) => "SEARCH_PROVIDER_ERROR",
            PlannerError::Places(_) => "PLACES_PROVIDER_ERROR",
            PlannerError::Generation(_) => "GENERATION_ERROR",
        }
    }

    /// Check if this error is absorbed as phase text instead of failing the run
    pub fn is_phase_local(&self) -> bool {
        matches!(
            self,
            PlannerError::Http(_)
                | PlannerError::Search(_)
                | PlannerError::Places(_)
                | PlannerError::Generation(_)
        )
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "phase_local": self.is_phase_local()
            }
        })
    }
}
