//! Voila: AI style feedback for outfit photos.
//!
//! [`StyleAdvisor`] is the entry point. Hand it a [`CompletionClient`]
//! (normally an [`OpenAiClient`]) and call one of its three operations; none
//! of them return errors, failures come back as fallback values that can be
//! rendered like real ones.
//!
//! ```no_run
//! use voila::{CredentialSource, ImagePayload, InferenceConfig, OpenAiClient, StyleAdvisor};
//!
//! # async fn demo() -> voila::Result<()> {
//! let client = OpenAiClient::new(InferenceConfig::from_env(CredentialSource::Client))?;
//! let advisor = StyleAdvisor::new(client);
//!
//! let image = ImagePayload::from_bytes("image/jpeg", &std::fs::read("outfit.jpg").unwrap());
//! let evaluation = advisor.evaluate_outfit(&image).await;
//! println!("{}/10: {}", evaluation.display_score(), evaluation.style_analysis);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod inference;
pub mod logger;
pub mod models;
pub mod normalizer;
#[cfg(feature = "server")]
pub mod server;
pub mod stylist;

pub use config::{CredentialSource, InferenceConfig, ServerConfig};
pub use error::{Result, VoilaError};
pub use inference::{CompletionClient, CompletionRequest, OpenAiClient};
pub use models::{ImagePayload, OutfitEvaluation};
pub use stylist::StyleAdvisor;
