use crate::{
    error::{Result, VoilaError},
    models::{ChatMessage, ContentPart, ImagePayload, ImageUrl, MessageContent},
};
use async_trait::async_trait;
use std::sync::Arc;

/// One chat completion call. `image` switches the message from plain text to
/// a text + image pair.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn text(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            max_tokens,
            temperature,
        }
    }

    pub fn with_image(
        prompt: impl Into<String>,
        image: ImagePayload,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            image: Some(image),
            max_tokens,
            temperature,
        }
    }

    pub fn to_message(&self) -> ChatMessage {
        let content = match &self.image {
            Some(image) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: self.prompt.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.as_str().to_string(),
                    },
                },
            ]),
            None => MessageContent::Text(self.prompt.clone()),
        };
        ChatMessage::user(content)
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one request and returns the text of the first choice as the
    /// model sent it, `None` when there is no choice or no content.
    /// Never retries.
    async fn fetch_content(&self, request: CompletionRequest) -> Result<Option<String>>;

    /// Like [`fetch_content`](Self::fetch_content), but a missing or blank
    /// reply is an `InferenceError`.
    async fn request_completion(&self, request: CompletionRequest) -> Result<String> {
        self.fetch_content(request)
            .await?
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| VoilaError::InferenceError("No response from model".into()))
    }
}

#[async_trait]
impl<C: CompletionClient + ?Sized> CompletionClient for Arc<C> {
    async fn fetch_content(&self, request: CompletionRequest) -> Result<Option<String>> {
        (**self).fetch_content(request).await
    }
}
