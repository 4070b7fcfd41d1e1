//! Types for text emotion classification.

use serde::{Deserialize, Serialize};

/// One label of the classifier's fixed vocabulary with its probability.
///
/// The classifier returns every vocabulary label exactly once per request.
/// Scores are independent multi-label probabilities in [0, 1] and need not
/// sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// The fixed emotion vocabulary providers are expected to cover.
pub const EMOTION_LABELS: &[&str] = &[
    "anger",
    "disgust",
    "fear",
    "joy",
    "neutral",
    "sadness",
    "surprise",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_score_deserializes_provider_shape() {
        let scores: Vec<LabelScore> =
            serde_json::from_str(r#"[{"label": "joy", "score": 0.93}, {"label": "anger", "score": 0.02}]"#)
                .unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].label, "joy");
        assert_eq!(scores[0].score, 0.93);
    }
}
