//! The analysis pipeline: one transcript in, one complete report out.

use log::debug;
use serde::Serialize;
use utoipa::ToSchema;

use crate::emotion::{self, EmotionProbability};
use crate::error::{stage_error, Error, Stage};
use crate::lexicon::Lexicon;
use crate::persuasion;
use crate::readability;

/// The speech-quality report produced for one transcript.
///
/// Created once per request, returned, then discarded; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Verbatim transcript text.
    pub transcript: String,
    /// Flesch Reading Ease score, rounded to two decimal places.
    pub readability: f64,
    /// Whole-word disfluency occurrences in the transcript.
    pub disfluency_count: u32,
    /// Highest-scoring emotion label.
    pub dominant_emotion: String,
    /// Per-label emotion breakdown in vocabulary order, scores rounded to
    /// two decimal places.
    pub emotion_scores: Vec<EmotionProbability>,
    /// Persuasive-term hits, capped at 10.
    pub persuasiveness_score: u32,
    /// Suggested restatement of the speech.
    pub suggested_change: String,
}

/// Composes the sub-scorers over one transcript.
///
/// Holds the two compiled lexicons; everything else is stateless. The
/// pipeline performs no I/O and no locking, so a single instance can serve
/// concurrent requests.
#[derive(Debug)]
pub struct AnalysisPipeline {
    disfluencies: Lexicon,
    persuasive_terms: Lexicon,
}

impl AnalysisPipeline {
    pub fn new(disfluencies: Lexicon, persuasive_terms: Lexicon) -> Self {
        Self {
            disfluencies,
            persuasive_terms,
        }
    }

    /// Build a pipeline over the default disfluency and persuasive-term
    /// lexicons.
    pub fn with_default_lexicons() -> Result<Self, regex::Error> {
        Ok(Self::new(
            Lexicon::disfluencies()?,
            Lexicon::persuasive_terms()?,
        ))
    }

    /// Produce a complete report for one transcript.
    ///
    /// All four sub-scores are computed from the same `transcript` value.
    /// `restated_transcript` is an independently supplied input (a second
    /// transcription pass upstream) and is carried into the report verbatim.
    ///
    /// Any stage failure propagates wrapped with the stage's identity; a
    /// report is only ever returned fully populated.
    pub fn analyze(
        &self,
        transcript: &str,
        raw_emotions: &[EmotionProbability],
        restated_transcript: &str,
    ) -> Result<AnalysisReport, Error> {
        let readability = emotion::round_two_places(readability::flesch_reading_ease(transcript));
        let disfluency_count = self.disfluencies.count_matches(transcript);
        let (dominant_emotion, emotion_scores) =
            emotion::aggregate(raw_emotions).map_err(|e| stage_error(Stage::Emotion, e))?;
        let persuasiveness_score = persuasion::score(transcript, &self.persuasive_terms);

        debug!(
            "Analyzed transcript: {} words, {} disfluencies, dominant emotion {}",
            transcript.split_whitespace().count(),
            disfluency_count,
            dominant_emotion
        );

        Ok(AnalysisReport {
            transcript: transcript.to_string(),
            readability,
            disfluency_count,
            dominant_emotion,
            emotion_scores,
            persuasiveness_score,
            suggested_change: restated_transcript.to_string(),
        })
    }
}
