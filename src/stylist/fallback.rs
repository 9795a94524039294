use crate::{error::VoilaError, models::OutfitEvaluation};

pub const FALLBACK_TRENDS: [&str; 10] = [
    "Oversized blazers and structured shoulders",
    "Y2K revival: low-rise jeans and crop tops",
    "Chunky gold jewelry and statement earrings",
    "Platform shoes and chunky sneakers",
    "Color blocking with bold, contrasting colors",
    "Sheer and mesh layering pieces",
    "Wide-leg trousers and palazzo pants",
    "Vintage band tees and graphic prints",
    "Leather and faux leather everything",
    "Minimalist accessories with clean lines",
];

pub fn fallback_trends() -> Vec<String> {
    FALLBACK_TRENDS.iter().map(|s| s.to_string()).collect()
}

/// The record shown in place of a real evaluation. Rendered like any other
/// evaluation, so every field carries something the user can act on.
pub fn fallback_evaluation(error: &VoilaError) -> OutfitEvaluation {
    let hint = match error {
        VoilaError::ConfigError(_) => "Please check your OpenAI API key configuration.",
        VoilaError::MalformedResponseError(_) => {
            "The stylist replied in an unexpected format. Please try again."
        }
        VoilaError::InferenceError(_) | VoilaError::ProxyError(_) => {
            "Please check your OpenAI API key configuration and internet connection."
        }
    };

    OutfitEvaluation {
        what_you_did_right: vec![
            "Unable to analyze image - please check your API key and internet connection"
                .to_string(),
        ],
        improvements: vec![
            "Make sure your OpenAI API key is valid and has sufficient credits".to_string(),
            "Check that the image uploaded successfully".to_string(),
            "Try uploading a different image format (JPG, PNG)".to_string(),
        ],
        overall_score: 0.0,
        style_analysis: format!("Error analyzing outfit: {}. {}", error.message(), hint),
        trending_elements: vec![
            "Fix API configuration to get personalized recommendations".to_string(),
        ],
    }
}

/// Plain-text answer for a failed custom question. Never empty.
pub fn fallback_answer(error: &VoilaError) -> String {
    let message = error.message().trim();
    if message.is_empty() {
        "Unknown error during custom evaluation.".to_string()
    } else {
        message.to_string()
    }
}
