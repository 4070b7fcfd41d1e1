//! The speech-analysis request flow.
//!
//! Composes the injected collaborators over one upload: prepare the audio,
//! transcribe it (twice — the second, independent pass supplies the
//! suggested restatement), classify the transcript's emotions, and run the
//! pure analysis pipeline. Collaborators arrive as trait objects so the
//! flow can be exercised with test doubles; there are no ambient singletons.

use analysis::{AnalysisPipeline, AnalysisReport, EmotionProbability};
use log::*;

use speech_ai::traits::{audio, classification, transcription};
use speech_ai::Error as ProviderError;

use crate::error::{classification_error, Error};

/// Analyze one uploaded recording into a complete report.
///
/// Any step failure propagates as a domain error; a report is only ever
/// returned fully populated.
pub async fn analyze_upload(
    preparer: &dyn audio::Preparer,
    transcriber: &dyn transcription::Provider,
    classifier: &dyn classification::Provider,
    pipeline: &AnalysisPipeline,
    upload: &[u8],
    filename: &str,
) -> Result<AnalysisReport, Error> {
    info!("Analyzing upload {} ({} bytes)", filename, upload.len());

    let prepared = preparer.prepare(upload, filename).await?;

    let primary = transcriber.transcribe(&prepared).await?;
    let transcript = primary
        .completed_text()
        .ok_or_else(|| {
            Error::from(ProviderError::Transcription(
                "Provider returned an empty transcript".to_string(),
            ))
        })?
        .to_string();
    debug!(
        "Primary transcript via {}: {} chars",
        transcriber.provider_id(),
        transcript.len()
    );

    let raw_emotions: Vec<EmotionProbability> = classifier
        .classify(&transcript)
        .await
        .map_err(classification_error)?
        .into_iter()
        .map(|s| EmotionProbability::new(s.label, s.score))
        .collect();

    // Independent second pass; with a non-deterministic provider the text
    // may legitimately differ from the primary transcript.
    let restated = transcriber.transcribe(&prepared).await?;
    let restated_text = restated
        .completed_text()
        .ok_or_else(|| {
            Error::from(ProviderError::Transcription(
                "Provider returned an empty restatement".to_string(),
            ))
        })?
        .to_string();

    let report = pipeline.analyze(&transcript, &raw_emotions, &restated_text)?;
    info!(
        "Analysis complete for {}: {} disfluencies, dominant emotion {}",
        filename, report.disfluency_count, report.dominant_emotion
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, ExternalErrorKind, InternalErrorKind};
    use speech_ai::traits::audio::MockPreparer;
    use speech_ai::traits::classification::MockProvider as MockClassifier;
    use speech_ai::traits::transcription::MockProvider as MockTranscriber;
    use speech_ai::types::audio::PreparedAudio;
    use speech_ai::types::classification::LabelScore;
    use speech_ai::types::transcription::{Status, Transcription};
    use std::path::PathBuf;

    fn prepared_audio() -> PreparedAudio {
        PreparedAudio::new(PathBuf::from("prepared.wav"), 16_000, 1)
    }

    fn completed(id: &str, text: &str) -> Transcription {
        Transcription {
            id: id.to_string(),
            status: Status::Completed,
            text: Some(text.to_string()),
            confidence: Some(0.95),
            duration_seconds: Some(4),
            language_code: Some("en".to_string()),
            error_message: None,
        }
    }

    fn emotion_scores() -> Vec<LabelScore> {
        [
            ("anger", 0.04),
            ("disgust", 0.01),
            ("fear", 0.02),
            ("joy", 0.81),
            ("neutral", 0.08),
            ("sadness", 0.02),
            ("surprise", 0.02),
        ]
        .into_iter()
        .map(|(label, score)| LabelScore {
            label: label.to_string(),
            score,
        })
        .collect()
    }

    fn mock_preparer() -> MockPreparer {
        let mut preparer = MockPreparer::new();
        preparer
            .expect_prepare()
            .returning(|_, _| Ok(prepared_audio()));
        preparer
    }

    fn pipeline() -> AnalysisPipeline {
        AnalysisPipeline::with_default_lexicons().unwrap()
    }

    #[tokio::test]
    async fn test_full_flow_produces_report() {
        let preparer = mock_preparer();

        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .times(1)
            .returning(|_| Ok(completed("t_1", "Um, this is, like, a proven plan.")));
        transcriber
            .expect_transcribe()
            .times(1)
            .returning(|_| Ok(completed("t_2", "This is a proven plan.")));
        transcriber.expect_provider_id().return_const("assemblyai".to_string());

        let mut classifier = MockClassifier::new();
        classifier
            .expect_classify()
            .returning(|_| Ok(emotion_scores()));

        let report = analyze_upload(
            &preparer,
            &transcriber,
            &classifier,
            &pipeline(),
            b"fake-upload",
            "talk.m4a",
        )
        .await
        .unwrap();

        assert_eq!(report.transcript, "Um, this is, like, a proven plan.");
        assert_eq!(report.suggested_change, "This is a proven plan.");
        assert_eq!(report.disfluency_count, 2);
        assert_eq!(report.persuasiveness_score, 1);
        assert_eq!(report.dominant_emotion, "joy");
    }

    #[tokio::test]
    async fn test_empty_transcript_is_transcription_error() {
        let preparer = mock_preparer();

        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Ok(completed("t_1", "   ")));

        let classifier = MockClassifier::new();

        let err = analyze_upload(
            &preparer,
            &transcriber,
            &classifier,
            &pipeline(),
            b"fake-upload",
            "talk.m4a",
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Transcription)
        );
    }

    #[tokio::test]
    async fn test_classifier_failure_maps_to_classification() {
        let preparer = mock_preparer();

        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Ok(completed("t_1", "Some words here.")));
        transcriber.expect_provider_id().return_const("assemblyai".to_string());

        let mut classifier = MockClassifier::new();
        classifier
            .expect_classify()
            .returning(|_| Err(ProviderError::Provider("model offline".to_string())));

        let err = analyze_upload(
            &preparer,
            &transcriber,
            &classifier,
            &pipeline(),
            b"fake-upload",
            "talk.m4a",
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Classification)
        );
    }

    #[tokio::test]
    async fn test_empty_classifier_output_fails_in_pipeline() {
        let preparer = mock_preparer();

        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Ok(completed("t_1", "Some words here.")));
        transcriber.expect_provider_id().return_const("assemblyai".to_string());

        let mut classifier = MockClassifier::new();
        classifier.expect_classify().returning(|_| Ok(Vec::new()));

        let err = analyze_upload(
            &preparer,
            &transcriber,
            &classifier,
            &pipeline(),
            b"fake-upload",
            "talk.m4a",
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Analysis(_))
        ));
    }

    #[tokio::test]
    async fn test_undecodable_upload_is_audio_decode_error() {
        let mut preparer = MockPreparer::new();
        preparer
            .expect_prepare()
            .returning(|_, _| Err(ProviderError::AudioDecode("unsupported codec".to_string())));

        let transcriber = MockTranscriber::new();
        let classifier = MockClassifier::new();

        let err = analyze_upload(
            &preparer,
            &transcriber,
            &classifier,
            &pipeline(),
            b"not-audio",
            "notes.txt",
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::AudioDecode)
        );
    }
}
