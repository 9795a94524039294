use crate::{
    config::InferenceConfig,
    error::{Result, VoilaError},
    inference::traits::{CompletionClient, CompletionRequest},
    models::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse},
};
use async_trait::async_trait;
use reqwest::Client;

/// Chat-completion client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    config: InferenceConfig,
}

impl OpenAiClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| VoilaError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn build_payload(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![request.to_message()],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn fetch_content(&self, request: CompletionRequest) -> Result<Option<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| VoilaError::ConfigError("No OpenAI API key configured".into()))?;

        let payload = self.build_payload(&request);

        log::info!("Requesting completion from model: {}", self.config.model);
        log::debug!(
            "max_tokens={} temperature={} image={:?}",
            request.max_tokens,
            request.temperature,
            request.image
        );

        let response = self
            .client
            .post(self.config.chat_completions_url())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Inference request failed: {:?}", e);
                VoilaError::InferenceError(format!("Request to inference API failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            log::error!("Inference API returned {}: {}", status, message);
            return Err(VoilaError::InferenceError(format!(
                "Inference API returned {}: {}",
                status, message
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        Ok(completion.first_content().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImagePayload;
    use serde_json::json;
    use std::time::Duration;

    fn client(config: InferenceConfig) -> OpenAiClient {
        OpenAiClient::new(config).unwrap()
    }

    #[test]
    fn test_payload_with_image_has_two_parts() {
        let client = client(InferenceConfig::new().with_model("gpt-4o"));
        let request = CompletionRequest::with_image(
            "What shoes go with this?",
            ImagePayload::new("data:image/jpeg;base64,AAAA"),
            1000,
            0.5,
        );

        let payload = serde_json::to_value(client.build_payload(&request)).unwrap();
        assert_eq!(
            payload,
            json!({
                "model": "gpt-4o",
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "What shoes go with this?" },
                        { "type": "image_url", "image_url": { "url": "data:image/jpeg;base64,AAAA" } }
                    ]
                }],
                "max_tokens": 1000,
                "temperature": 0.5
            })
        );
    }

    #[test]
    fn test_payload_without_image_is_plain_text() {
        let client = client(InferenceConfig::new());
        let request = CompletionRequest::text("List trends", 500, 0.7);

        let payload = serde_json::to_value(client.build_payload(&request)).unwrap();
        assert_eq!(payload["messages"][0]["content"], json!("List trends"));
        assert_eq!(payload["max_tokens"], json!(500));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        let client = client(InferenceConfig::new().with_base_url("http://127.0.0.1:9"));
        let err = client
            .request_completion(CompletionRequest::text("hi", 10, 0.1))
            .await
            .unwrap_err();
        assert!(matches!(err, VoilaError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_inference_error() {
        let client = client(
            InferenceConfig::new()
                .with_api_key("test-key")
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(Duration::from_secs(2)),
        );
        assert_eq!(client.config().timeout, Some(Duration::from_secs(2)));
        let err = client
            .request_completion(CompletionRequest::text("hi", 10, 0.1))
            .await
            .unwrap_err();
        assert!(matches!(err, VoilaError::InferenceError(_)));
    }

    #[cfg(feature = "server")]
    mod against_local_api {
        use super::*;
        use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};

        async fn spawn_fake_api(status: u16, body: serde_json::Value) -> String {
            let server = HttpServer::new(move || {
                let body = body.clone();
                App::new().route(
                    "/v1/chat/completions",
                    web::post().to(move |req: HttpRequest| {
                        let body = body.clone();
                        async move {
                            let authorized = req
                                .headers()
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                == Some("Bearer test-key");
                            if !authorized {
                                return HttpResponse::Unauthorized()
                                    .json(json!({ "error": { "message": "bad key" } }));
                            }
                            HttpResponse::build(StatusCode::from_u16(status).unwrap()).json(body)
                        }
                    }),
                )
            })
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();

            let addr = server.addrs()[0];
            actix_web::rt::spawn(server.run());
            format!("http://{}/v1", addr)
        }

        fn client_for(base_url: String) -> OpenAiClient {
            client(
                InferenceConfig::new()
                    .with_api_key("test-key")
                    .with_base_url(base_url),
            )
        }

        #[actix_web::test]
        async fn test_returns_first_choice_content() {
            let base_url = spawn_fake_api(
                200,
                json!({ "choices": [{ "message": { "role": "assistant", "content": "Looks sharp." } }] }),
            )
            .await;

            let text = client_for(base_url)
                .request_completion(CompletionRequest::text("hi", 10, 0.1))
                .await
                .unwrap();
            assert_eq!(text, "Looks sharp.");
        }

        #[actix_web::test]
        async fn test_empty_choices_is_inference_error() {
            let base_url = spawn_fake_api(200, json!({ "choices": [] })).await;

            let err = client_for(base_url)
                .request_completion(CompletionRequest::text("hi", 10, 0.1))
                .await
                .unwrap_err();
            assert_eq!(err.message(), "No response from model");
        }

        #[actix_web::test]
        async fn test_blank_content_is_returned_as_sent() {
            let base_url = spawn_fake_api(
                200,
                json!({ "choices": [{ "message": { "role": "assistant", "content": "" } }] }),
            )
            .await;
            let client = client_for(base_url);

            let content = client
                .fetch_content(CompletionRequest::text("hi", 10, 0.1))
                .await
                .unwrap();
            assert_eq!(content.as_deref(), Some(""));

            let err = client
                .request_completion(CompletionRequest::text("hi", 10, 0.1))
                .await
                .unwrap_err();
            assert_eq!(err.message(), "No response from model");
        }

        #[actix_web::test]
        async fn test_empty_choices_fetch_none() {
            let base_url = spawn_fake_api(200, json!({ "choices": [] })).await;

            let content = client_for(base_url)
                .fetch_content(CompletionRequest::text("hi", 10, 0.1))
                .await
                .unwrap();
            assert_eq!(content, None);
        }

        #[actix_web::test]
        async fn test_error_status_carries_api_message() {
            let base_url = spawn_fake_api(
                429,
                json!({ "error": { "message": "You exceeded your current quota" } }),
            )
            .await;

            let err = client_for(base_url)
                .request_completion(CompletionRequest::text("hi", 10, 0.1))
                .await
                .unwrap_err();
            assert!(matches!(err, VoilaError::InferenceError(_)));
            assert!(err.message().contains("You exceeded your current quota"));
        }
    }
}
