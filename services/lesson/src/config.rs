use lingua_core::llm_client::{DEFAULT_MODEL, GEMINI_OPENAI_BASE, GeminiConfig};
use tracing_subscriber::EnvFilter;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub chat_model: String,
    /// `RUST_LOG` directives, e.g. `info` or `lingua_core=debug`.
    pub log_filter: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// A missing credential is not an error here; it is reported by
    /// `gemini_config` so that offline runs can proceed without one.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let gemini_api_base =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| GEMINI_OPENAI_BASE.to_string());

        let chat_model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        EnvFilter::try_new(&log_filter).map_err(|e| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log filter: {}", log_filter, e),
            )
        })?;

        Ok(Self {
            gemini_api_key,
            gemini_api_base,
            chat_model,
            log_filter,
        })
    }

    /// Builds the log filter from the validated `RUST_LOG` directives.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_filter)
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Builds the connection settings for the lesson executor.
    pub fn gemini_config(&self) -> Result<GeminiConfig, ConfigError> {
        let api_key = self.gemini_api_key.as_deref().ok_or_else(|| {
            ConfigError::MissingVar("GEMINI_API_KEY must be set to generate lessons".to_string())
        })?;
        let config = GeminiConfig::new(api_key)
            .map_err(|e| ConfigError::InvalidValue("GEMINI_API_KEY".to_string(), e.to_string()))?;
        Ok(config
            .with_api_base(&self.gemini_api_base)
            .with_model(&self.chat_model))
    }
}
