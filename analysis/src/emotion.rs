//! Emotion-score aggregation over classifier output.
//!
//! The classifier returns one probability per label of a fixed emotion
//! vocabulary (anger, disgust, fear, joy, neutral, sadness, surprise).
//! Scores are independent multi-label probabilities and need not sum to 1.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{empty_input_error, Error};

/// A single emotion label with its classifier probability.
///
/// Serialized as `{"emotion": ..., "score": ...}` in report breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmotionProbability {
    #[serde(rename = "emotion")]
    pub label: String,
    /// Probability in [0, 1].
    pub score: f64,
}

impl EmotionProbability {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Derive the dominant label and a rounded breakdown from raw classifier
/// output.
///
/// The dominant label is a stable argmax: ties are broken by first
/// occurrence in the input's label order. The breakdown preserves the input
/// order (the fixed vocabulary order, not sorted by score) with each score
/// rounded to two decimal places.
///
/// Fails with an empty-input error when `raw` is empty; the classifier is
/// expected to always return the full vocabulary.
pub fn aggregate(
    raw: &[EmotionProbability],
) -> Result<(String, Vec<EmotionProbability>), Error> {
    let dominant = raw
        .iter()
        .reduce(|best, candidate| {
            if candidate.score > best.score {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(empty_input_error)?;

    let breakdown = raw
        .iter()
        .map(|p| EmotionProbability::new(p.label.clone(), round_two_places(p.score)))
        .collect();

    Ok((dominant.label.clone(), breakdown))
}

/// Round to two decimal places for report output.
pub fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn probabilities(pairs: &[(&str, f64)]) -> Vec<EmotionProbability> {
        pairs
            .iter()
            .map(|(label, score)| EmotionProbability::new(*label, *score))
            .collect()
    }

    #[test]
    fn test_dominant_is_maximum_score() {
        let raw = probabilities(&[("joy", 0.9), ("anger", 0.1)]);
        let (dominant, _) = aggregate(&raw).unwrap();
        assert_eq!(dominant, "joy");
    }

    #[test]
    fn test_ties_break_by_input_order() {
        let raw = probabilities(&[("fear", 0.5), ("surprise", 0.5), ("joy", 0.5)]);
        let (dominant, _) = aggregate(&raw).unwrap();
        assert_eq!(dominant, "fear");
    }

    #[test]
    fn test_breakdown_preserves_order_and_rounds() {
        let raw = probabilities(&[("joy", 0.876), ("anger", 0.124), ("neutral", 0.005)]);
        let (_, breakdown) = aggregate(&raw).unwrap();
        let labels: Vec<&str> = breakdown.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["joy", "anger", "neutral"]);
        assert_eq!(breakdown[0].score, 0.88);
        assert_eq!(breakdown[1].score, 0.12);
        assert_eq!(breakdown[2].score, 0.01);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = aggregate(&[]).unwrap_err();
        assert_eq!(err.error_kind, ErrorKind::EmptyInput);
    }

    #[test]
    fn test_serializes_with_emotion_key() {
        let probability = EmotionProbability::new("joy", 0.9);
        let json = serde_json::to_value(&probability).unwrap();
        assert_eq!(json, serde_json::json!({"emotion": "joy", "score": 0.9}));
    }
}
