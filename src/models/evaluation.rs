use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-field outfit assessment. Field names on the wire are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitEvaluation {
    pub what_you_did_right: Vec<String>,
    pub improvements: Vec<String>,
    #[serde(with = "score")]
    pub overall_score: f64,
    pub style_analysis: String,
    pub trending_elements: Vec<String>,
}

impl OutfitEvaluation {
    /// Score rounded and clamped to 0..=10 for display. The stored value is
    /// whatever the model sent.
    pub fn display_score(&self) -> u8 {
        if self.overall_score.is_nan() {
            return 0;
        }
        self.overall_score.round().clamp(0.0, 10.0) as u8
    }
}

/// Base64 data URL of an image. Forwarded to the model untouched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

impl ImagePayload {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ImagePayload {
    fn from(data_url: String) -> Self {
        Self(data_url)
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImagePayload({} bytes)", self.0.len())
    }
}

/// The model sometimes sends the score as `"7"`, `"7/10"` or `[7]`; all of
/// those are read as a number. Whole numbers are written back as integers.
mod score {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if score.fract() == 0.0 && score.abs() < i64::MAX as f64 {
            serializer.serialize_i64(*score as i64)
        } else {
            serializer.serialize_f64(*score)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(&value)
            .ok_or_else(|| D::Error::custom(format!("overallScore is not a number: {}", value)))
    }

    fn from_value(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let head = s.split('/').next().unwrap_or_default().trim();
                head.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            Value::Array(items) if items.len() == 1 => from_value(&items[0]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn evaluation_with_score(score: serde_json::Value) -> serde_json::Result<OutfitEvaluation> {
        serde_json::from_value(json!({
            "whatYouDidRight": ["Tailored blazer"],
            "improvements": ["Swap the belt"],
            "overallScore": score,
            "styleAnalysis": "Clean lines.",
            "trendingElements": ["Wide-leg trousers"]
        }))
    }

    #[test]
    fn test_score_accepts_lenient_shapes() {
        assert_eq!(evaluation_with_score(json!(8)).unwrap().overall_score, 8.0);
        assert_eq!(evaluation_with_score(json!(7.5)).unwrap().overall_score, 7.5);
        assert_eq!(evaluation_with_score(json!("6")).unwrap().overall_score, 6.0);
        assert_eq!(evaluation_with_score(json!("9/10")).unwrap().overall_score, 9.0);
        assert_eq!(evaluation_with_score(json!([4])).unwrap().overall_score, 4.0);
    }

    #[test]
    fn test_score_rejects_non_numeric() {
        assert!(evaluation_with_score(json!("great")).is_err());
        assert!(evaluation_with_score(json!([1, 2])).is_err());
        assert!(evaluation_with_score(json!(null)).is_err());
    }

    #[test]
    fn test_serializes_wire_names_and_integer_score() {
        let evaluation = evaluation_with_score(json!(7)).unwrap();
        let value = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(value["overallScore"], json!(7));
        assert_eq!(value["whatYouDidRight"], json!(["Tailored blazer"]));
        assert_eq!(value["styleAnalysis"], json!("Clean lines."));
    }

    #[test]
    fn test_display_score_clamps() {
        let mut evaluation = evaluation_with_score(json!(14)).unwrap();
        assert_eq!(evaluation.display_score(), 10);
        evaluation.overall_score = -3.0;
        assert_eq!(evaluation.display_score(), 0);
        evaluation.overall_score = 6.6;
        assert_eq!(evaluation.display_score(), 7);
    }

    #[test]
    fn test_image_payload_from_bytes() {
        let payload = ImagePayload::from_bytes("image/png", b"abc");
        assert_eq!(payload.as_str(), "data:image/png;base64,YWJj");
        assert!(!payload.is_empty());
        assert!(ImagePayload::new("  ").is_empty());
        assert_eq!(format!("{:?}", payload), "ImagePayload(26 bytes)");
        assert_eq!(payload.into_inner(), "data:image/png;base64,YWJj");
    }
}
