use crate::{
    error::{Result, VoilaError},
    inference::{CompletionClient, CompletionRequest},
    models::{EvaluateRequest, EvaluateResponse, ErrorResponse, ImagePayload},
    server::AppState,
};
use actix_web::{web, HttpResponse};
use uuid::Uuid;

pub const PROXY_MAX_TOKENS: u32 = 1200;
pub const PROXY_TEMPERATURE: f32 = 0.3;

/// `POST /api/evaluate`: forwards the image and prompt with the server's key.
/// A request without an image is still forwarded and the upstream error comes
/// back as a 500.
pub async fn evaluate(
    state: web::Data<AppState>,
    body: web::Json<EvaluateRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();
    let body = body.into_inner();
    let prompt = body.prompt().to_string();

    if body.image_base64.is_empty() {
        log::warn!("[req:{}] Request carries no image", request_id);
    }
    log::info!(
        "[req:{}] Proxying evaluation ({} byte image)",
        request_id,
        body.image_base64.len()
    );

    let request = CompletionRequest::with_image(
        prompt,
        ImagePayload::from(body.image_base64),
        PROXY_MAX_TOKENS,
        PROXY_TEMPERATURE,
    );

    match proxy_completion(state.client.as_ref(), request).await {
        Ok(content) => {
            log::info!("[req:{}] Evaluation proxied", request_id);
            HttpResponse::Ok().json(EvaluateResponse { content })
        }
        Err(e) => {
            log::error!("[req:{}] {}", request_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.message().to_string(),
            })
        }
    }
}

/// An empty reply is passed through as empty content.
async fn proxy_completion(client: &dyn CompletionClient, request: CompletionRequest) -> Result<String> {
    client
        .fetch_content(request)
        .await
        .map(Option::unwrap_or_default)
        .map_err(|e| VoilaError::ProxyError(e.message().to_string()))
}
