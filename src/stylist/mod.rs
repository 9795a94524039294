pub mod fallback;
pub mod prompts;

use crate::{
    error::{Result, VoilaError},
    inference::{CompletionClient, CompletionRequest},
    logger,
    models::{ImagePayload, OutfitEvaluation},
    normalizer,
};

pub use fallback::{fallback_answer, fallback_evaluation, fallback_trends, FALLBACK_TRENDS};

/// The three operations the app calls. None of them fail: every error is
/// logged and turned into a value of the expected shape.
#[derive(Clone)]
pub struct StyleAdvisor<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> StyleAdvisor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Scores the outfit against the stylist rubric.
    pub async fn evaluate_outfit(&self, image: &ImagePayload) -> OutfitEvaluation {
        let _timer = logger::timer("evaluate_outfit");

        match self.try_evaluate_outfit(image).await {
            Ok(evaluation) => {
                log::info!("Outfit evaluated with score {}", evaluation.overall_score);
                evaluation
            }
            Err(e) => {
                log::error!("Error evaluating outfit: {}", e);
                fallback_evaluation(&e)
            }
        }
    }

    /// Answers a free-form question about the outfit. A blank question is
    /// treated as a general evaluation request.
    pub async fn custom_evaluate_outfit(
        &self,
        image: &ImagePayload,
        question: Option<&str>,
    ) -> String {
        let _timer = logger::timer("custom_evaluate_outfit");

        match self.try_custom_evaluate_outfit(image, question).await {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("Error in custom outfit evaluation: {}", e);
                fallback_answer(&e)
            }
        }
    }

    /// Ten current trends, or the built-in list when the model can't deliver.
    pub async fn get_trending_styles(&self) -> Vec<String> {
        let _timer = logger::timer("get_trending_styles");

        match self.try_get_trending_styles().await {
            Ok(trends) if !trends.is_empty() => trends,
            Ok(_) => {
                log::warn!("Model returned no trends, using built-in list");
                fallback_trends()
            }
            Err(e) => {
                log::error!("Error fetching trending styles: {}", e);
                fallback_trends()
            }
        }
    }

    async fn try_evaluate_outfit(&self, image: &ImagePayload) -> Result<OutfitEvaluation> {
        require_image(image)?;

        let raw = self
            .client
            .request_completion(CompletionRequest::with_image(
                prompts::EVALUATION_PROMPT,
                image.clone(),
                prompts::EVALUATION_MAX_TOKENS,
                prompts::EVALUATION_TEMPERATURE,
            ))
            .await?;

        log::debug!("Raw evaluation response: {}", raw);
        normalizer::parse_structured(&normalizer::strip_code_fence(&raw))
    }

    async fn try_custom_evaluate_outfit(
        &self,
        image: &ImagePayload,
        question: Option<&str>,
    ) -> Result<String> {
        require_image(image)?;

        let question = question
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(prompts::DEFAULT_QUESTION);

        let raw = self
            .client
            .request_completion(CompletionRequest::with_image(
                prompts::custom_prompt(question),
                image.clone(),
                prompts::CUSTOM_MAX_TOKENS,
                prompts::CUSTOM_TEMPERATURE,
            ))
            .await?;

        Ok(raw.trim().to_string())
    }

    async fn try_get_trending_styles(&self) -> Result<Vec<String>> {
        let raw = self
            .client
            .request_completion(CompletionRequest::text(
                prompts::TRENDS_PROMPT,
                prompts::TRENDS_MAX_TOKENS,
                prompts::TRENDS_TEMPERATURE,
            ))
            .await?;

        normalizer::parse_string_list(&normalizer::strip_code_fence(&raw))
    }
}

fn require_image(image: &ImagePayload) -> Result<()> {
    if image.is_empty() {
        return Err(VoilaError::InferenceError(
            "No image provided - please upload a photo of your outfit".into(),
        ));
    }
    Ok(())
}
