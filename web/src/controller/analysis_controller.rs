//! Controller for audio analysis.
//!
//! Accepts a multipart audio upload, runs the full analysis flow, and
//! returns the speech-quality report.

use crate::{AppState, Error};

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;

use analysis::AnalysisReport;
use domain::speech;
use log::*;

/// Name of the multipart field carrying the recording.
const FILE_FIELD: &str = "file";

/// POST /analyze-audio
///
/// Analyze one uploaded audio recording and return the speech-quality
/// report: transcript, readability, disfluency count, emotional tone,
/// persuasiveness, and a suggested restatement.
#[utoipa::path(
    post,
    path = "/analyze-audio",
    request_body(
        content = Vec<u8>,
        content_type = "multipart/form-data",
        description = "Audio recording in the multipart field `file`",
    ),
    responses(
        (status = 200, description = "Speech quality report", body = AnalysisReport),
        (status = 422, description = "Missing file field or undecodable audio", body = crate::error::ErrorBody),
        (status = 502, description = "Upstream transcription or classification failure", body = crate::error::ErrorBody),
        (status = 500, description = "Internal error", body = crate::error::ErrorBody),
    )
)]
pub async fn analyze_audio(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    debug!("POST analyze-audio");

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some(FILE_FIELD) {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::InvalidRequest(format!("Unreadable upload: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        Error::InvalidRequest(format!("Missing multipart field '{FILE_FIELD}'"))
    })?;
    info!("Received upload: {} ({} bytes)", filename, bytes.len());

    let report = speech::analyze_upload(
        app_state.audio_preparer.as_ref(),
        app_state.transcriber.as_ref(),
        app_state.emotion_classifier.as_ref(),
        app_state.analysis_pipeline.as_ref(),
        &bytes,
        &filename,
    )
    .await?;

    Ok(Json(report))
}
