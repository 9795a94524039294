#[cfg(test)]
pub mod fake;
pub mod openai_client;
pub mod traits;

pub use openai_client::OpenAiClient;
pub use traits::{CompletionClient, CompletionRequest};
