use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoilaError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Inference error: {0}")]
    InferenceError(String),
    #[error("Malformed response: {0}")]
    MalformedResponseError(String),
    #[error("Proxy error: {0}")]
    ProxyError(String),
}

impl VoilaError {
    /// The bare message without the category prefix, for user-facing text.
    pub fn message(&self) -> &str {
        match self {
            VoilaError::ConfigError(msg)
            | VoilaError::InferenceError(msg)
            | VoilaError::MalformedResponseError(msg)
            | VoilaError::ProxyError(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for VoilaError {
    fn from(e: reqwest::Error) -> Self {
        VoilaError::InferenceError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VoilaError>;
