//! Test double for [`CompletionClient`]: replays a canned reply and records
//! every request it receives.

use crate::{
    error::{Result, VoilaError},
    inference::traits::{CompletionClient, CompletionRequest},
};
use async_trait::async_trait;
use std::sync::Mutex;

pub struct FakeClient {
    replies: Mutex<Vec<Result<String>>>,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl FakeClient {
    pub fn replying(reply: Result<String>) -> Self {
        Self {
            replies: Mutex::new(vec![reply]),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::replying(Ok(text.to_string()))
    }

    pub fn failing(error: VoilaError) -> Self {
        Self::replying(Err(error))
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for FakeClient {
    async fn fetch_content(&self, request: CompletionRequest) -> Result<Option<String>> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(VoilaError::InferenceError("no canned reply".into())))
            .map(Some)
    }
}
