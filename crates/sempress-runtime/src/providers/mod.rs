//! Generative providers for sentence reconstruction.
//!
//! Providers use the [`secrets`] module for credential handling: keys are
//! loaded once, cannot leak through `Debug` output, and are only exposed
//! at the point of the HTTP call.

use std::time::Duration;
use thiserror::Error;

pub mod secrets;

#[cfg(feature = "gemini")]
mod gemini;

pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "gemini")]
pub use gemini::{GeminiReconstructor, GEMINI_API_KEY_ENV};

/// Errors from a generative provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

impl ProviderError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(_)
            | ProviderError::RateLimited { .. }
            | ProviderError::Timeout(_) => true,
            ProviderError::Api { status, .. } => *status >= 500,
            ProviderError::Parse(_) | ProviderError::NotConfigured(_) => false,
        }
    }
}

/// Configuration for a reconstruction call.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model identifier.
    pub model: String,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            max_tokens: 200,
            temperature: 0.7,
            timeout: Duration::from_secs(15),
        }
    }
}

impl CompletionConfig {
    /// Config for a specific model, other knobs at defaults.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_gemini_flash() {
        let config = CompletionConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_transient_classification() {
        assert!(ProviderError::Http("connection reset".into()).is_transient());
        assert!(ProviderError::RateLimited { retry_after: None }.is_transient());
        assert!(ProviderError::Api {
            status: 503,
            message: "overloaded".into()
        }
        .is_transient());

        assert!(!ProviderError::Api {
            status: 400,
            message: "bad request".into()
        }
        .is_transient());
        assert!(!ProviderError::NotConfigured("no key".into()).is_transient());
        assert!(!ProviderError::Parse("truncated".into()).is_transient());
    }
}
