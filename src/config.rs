use crate::error::{PlannerError, Result};

/// Immutable provider credentials, built once at process start and passed
/// into [`crate::PlanningPipeline::new`]. A pipeline cannot be constructed
/// without all three keys.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub tavily_api_key: String,
    pub maps_api_key: String,
    pub gemini_api_key: String,
}

impl PlannerConfig {
    pub fn new(
        tavily_api_key: impl Into<String>,
        maps_api_key: impl Into<String>,
        gemini_api_key: impl Into<String>,
    ) -> Self {
        Self {
            tavily_api_key: tavily_api_key.into(),
            maps_api_key: maps_api_key.into(),
            gemini_api_key: gemini_api_key.into(),
        }
    }

    /// Build the configuration from environment variables. Any missing key is
    /// a fatal startup condition.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            tavily_api_key: require_env("TAVILY_API_KEY")?,
            maps_api_key: require_env("GOOGLE_MAPS_API_KEY")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| PlannerError::Config(format!("Missing {} env var", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        std::env::remove_var("TAVILY_API_KEY");
        let err = PlannerConfig::from_env().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("TAVILY_API_KEY"));
    }

    #[test]
    fn test_explicit_construction() {
        let config = PlannerConfig::new("t", "m", "g");
        assert_eq!(config.tavily_api_key, "t");
        assert_eq!(config.gemini_api_key, "g");
    }
}
