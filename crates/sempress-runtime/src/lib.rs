//! # sempress-runtime
//!
//! LLM-backed sentence reconstruction for `sempress-core` records.
//!
//! The core compression engine is deterministic and never talks to the
//! network. Expanding a compressed record back into prose is inherently
//! generative, so it lives here, behind the [`Reconstructor`] trait: a
//! reconstructor receives a [`SemanticAttributes`] record and returns a
//! sentence string. Nothing is assumed about how that string is produced
//! and it is not validated on the way back.
//!
//! The only shipped implementation targets the Gemini API (feature
//! `gemini`); see [`providers::GeminiReconstructor`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use sempress_core::compress;
//! use sempress_runtime::{providers::GeminiReconstructor, Reconstructor};
//!
//! let record = compress("Hey man, let's meet for lunch!");
//! let reconstructor = GeminiReconstructor::from_env()?;
//! let sentence = reconstructor.reconstruct(&record).await?;
//! ```

use async_trait::async_trait;
use sempress_core::SemanticAttributes;
use thiserror::Error;

pub mod prompts;
pub mod providers;

pub use providers::{ApiCredential, CompletionConfig, CredentialSource, ProviderError};

#[cfg(feature = "gemini")]
pub use providers::GeminiReconstructor;

/// Errors from reconstructing a sentence.
#[derive(Error, Debug)]
pub enum ReconstructError {
    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("provider returned an empty reconstruction")]
    EmptyResponse,
}

/// A service that expands a compressed record back into a sentence.
///
/// Implementations may call out to the network; the core never depends on
/// their timing or availability.
#[async_trait]
pub trait Reconstructor: Send + Sync {
    /// Reconstruct a sentence from a compressed record.
    async fn reconstruct(&self, record: &SemanticAttributes)
        -> Result<String, ReconstructError>;

    /// Implementation name for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sempress_core::compress;

    /// Echoes the record back as a template sentence. Stands in for a real
    /// provider so the trait surface can be exercised without network.
    struct TemplateReconstructor;

    #[async_trait]
    impl Reconstructor for TemplateReconstructor {
        async fn reconstruct(
            &self,
            record: &SemanticAttributes,
        ) -> Result<String, ReconstructError> {
            let subject = record.subject.as_deref().unwrap_or("someone");
            let action = record.action.as_deref().unwrap_or("does");
            match record.object.as_deref() {
                Some(object) => Ok(format!("{} {} {}", subject, action, object)),
                None => Ok(format!("{} {}", subject, action)),
            }
        }

        fn name(&self) -> &str {
            "template"
        }
    }

    #[tokio::test]
    async fn test_reconstructor_is_object_safe() {
        let reconstructor: Box<dyn Reconstructor> = Box::new(TemplateReconstructor);
        let record = compress("Hey man, let's meet for lunch!");

        let sentence = reconstructor.reconstruct(&record).await.unwrap();
        assert_eq!(sentence, "hey meet lunch");
        assert_eq!(reconstructor.name(), "template");
    }
}
