//! Turns raw model text into the shapes the stylist hands back.
//!
//! Models like to wrap JSON in a Markdown code fence even when told not to,
//! so every structured parse goes through [`strip_code_fence`] first.

use crate::{
    error::{Result, VoilaError},
    models::OutfitEvaluation,
};

const FENCE: &str = "```";

/// Removes a surrounding code fence, with or without a language tag.
/// Text without an opening fence comes back trimmed and otherwise untouched.
pub fn strip_code_fence(raw: &str) -> String {
    let trimmed = raw.trim();
    let rest = match trimmed.strip_prefix(FENCE) {
        Some(rest) => rest,
        None => return trimmed.to_string(),
    };

    // language tag, e.g. `json` or `JSON`
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    let rest = rest.trim_end();
    let interior = rest.strip_suffix(FENCE).unwrap_or(rest);
    interior.trim().to_string()
}

pub fn parse_structured(clean: &str) -> Result<OutfitEvaluation> {
    serde_json::from_str(clean).map_err(|e| {
        VoilaError::MalformedResponseError(format!("Could not parse outfit evaluation: {}", e))
    })
}

pub fn parse_string_list(clean: &str) -> Result<Vec<String>> {
    serde_json::from_str(clean).map_err(|e| {
        VoilaError::MalformedResponseError(format!("Could not parse list of strings: {}", e))
    })
}
