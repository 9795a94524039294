use serde::{Deserialize, Serialize};

pub const DEFAULT_PROXY_PROMPT: &str = "Evaluate this outfit.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[serde(default)]
    pub image_base64: String,
    #[serde(default)]
    pub user_prompt: Option<String>,
}

impl EvaluateRequest {
    pub fn prompt(&self) -> &str {
        self.user_prompt
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or(DEFAULT_PROXY_PROMPT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
