//! Types for transcription operations.

use serde::{Deserialize, Serialize};

/// Processing status of a speech-to-text transcription job.
///
/// Jobs typically progress Queued → Processing → Completed within minutes.
/// Poll with a bounded attempt budget; avoid tight loops that waste API
/// quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Queued,
    Processing,
    Completed,
    Failed,
}

/// Completed transcription result.
///
/// `text` is populated only when `status` is Completed; `error_message`
/// carries the provider's diagnostic when the job failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub id: String,
    pub status: Status,
    pub text: Option<String>,
    pub confidence: Option<f64>,
    pub duration_seconds: Option<i64>,
    pub language_code: Option<String>,
    pub error_message: Option<String>,
}

impl Transcription {
    /// The transcript text of a completed job.
    ///
    /// Returns `None` unless the job completed with non-empty text, so
    /// callers can treat an empty provider result as a transcription
    /// failure rather than analyzing an empty transcript.
    pub fn completed_text(&self) -> Option<&str> {
        match self.status {
            Status::Completed => self.text.as_deref().filter(|t| !t.trim().is_empty()),
            _ => None,
        }
    }
}
