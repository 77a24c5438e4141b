//! Gemini reconstruction provider.
//!
//! Calls the `generateContent` endpoint of the Google Generative Language
//! API. Transient failures (connection errors, rate limits, 5xx) are
//! retried with exponential backoff; everything else surfaces immediately.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use sempress_core::SemanticAttributes;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

use super::{
    secrets::{ApiCredential, CredentialSource},
    CompletionConfig, ProviderError,
};
use crate::prompts::render_prompt;
use crate::{ReconstructError, Reconstructor};

/// Environment variable name for the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini-backed sentence reconstructor.
///
/// The API key is held in an [`ApiCredential`]: it cannot leak through
/// `Debug` output and is only exposed when the request header is built.
pub struct GeminiReconstructor {
    credential: ApiCredential,
    base_url: String,
    config: CompletionConfig,
}

impl std::fmt::Debug for GeminiReconstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiReconstructor")
            .field("credential", &self.credential)
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish()
    }
}

impl GeminiReconstructor {
    /// Create a reconstructor with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credential: ApiCredential::new(
                api_key,
                CredentialSource::Programmatic,
                "Gemini API key",
            ),
            base_url: DEFAULT_BASE_URL.to_string(),
            config: CompletionConfig::default(),
        }
    }

    /// Create from the `GEMINI_API_KEY` environment variable, failing fast
    /// when it is unset.
    pub fn from_env() -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_env(GEMINI_API_KEY_ENV, "Gemini API key")?;
        Ok(Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            config: CompletionConfig::default(),
        })
    }

    /// Override the completion configuration.
    pub fn with_config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the API base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn client(&self) -> &reqwest::Client {
        static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
        CLIENT.get_or_init(|| {
            reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("failed to build HTTP client")
        })
    }

    /// One generateContent call, no retries.
    async fn generate_once(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.config.model
        );

        // Only expose the credential here, at the point of use.
        let response = self
            .client()
            .post(&url)
            .header("x-goog-api-key", self.credential.expose())
            .header("content-type", "application/json")
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.config.timeout)
                } else {
                    ProviderError::Http(e.to_string())
                }
            })?;

        let status = response.status();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(ProviderError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let message = match response.json::<GeminiErrorBody>().await {
                Ok(body) => body.error.message,
                Err(e) => format!("unreadable error body: {}", e),
            };
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let text = body
            .candidates
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

#[async_trait]
impl Reconstructor for GeminiReconstructor {
    async fn reconstruct(
        &self,
        record: &SemanticAttributes,
    ) -> Result<String, ReconstructError> {
        let prompt = render_prompt(record);

        let text = (|| async { self.generate_once(&prompt).await })
            .retry(ExponentialBuilder::default().with_max_times(2))
            .when(ProviderError::is_transient)
            .notify(|err, delay| {
                tracing::warn!(%err, ?delay, "retrying Gemini reconstruction");
            })
            .await?;

        let sentence = text.trim().to_string();
        if sentence.is_empty() {
            return Err(ReconstructError::EmptyResponse);
        }

        tracing::debug!(len = sentence.len(), "sentence reconstructed");
        Ok(sentence)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_shows_the_key() {
        let reconstructor = GeminiReconstructor::new("sk-gemini-secret");
        let debug = format!("{:?}", reconstructor);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-gemini-secret"));
    }

    #[test]
    fn test_builder_overrides() {
        let reconstructor = GeminiReconstructor::new("key")
            .with_base_url("http://localhost:9999/v1beta")
            .with_config(CompletionConfig::new("gemini-2.5-pro"));

        assert_eq!(reconstructor.base_url, "http://localhost:9999/v1beta");
        assert_eq!(reconstructor.config.model, "gemini-2.5-pro");
        assert_eq!(reconstructor.name(), "gemini");
    }

    #[test]
    fn test_response_shape_tolerates_missing_parts() {
        let body: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{}},{}]}"#).unwrap();
        let text: String = body
            .candidates
            .unwrap()
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();
        assert!(text.is_empty());
    }
}
