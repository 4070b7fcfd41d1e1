//! Transcription provider trait.

use crate::types::audio::PreparedAudio;
use crate::types::transcription::Transcription;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for speech-to-text transcription services.
///
/// Implementations convert a prepared waveform to text. Supports AssemblyAI,
/// Whisper, Deepgram. The analysis flow calls `transcribe` twice per request
/// (primary transcript and suggested restatement); the calls are independent
/// and may legitimately return different text when the upstream service is
/// non-deterministic.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Transcribe one prepared recording to completion.
    ///
    /// Implementations own their job lifecycle (submit, poll, collect) and
    /// return only once the provider reports a terminal state.
    async fn transcribe(
        &self,
        audio: &PreparedAudio,
    ) -> std::result::Result<Transcription, Error>;

    /// Return unique identifier for this provider (e.g., "assemblyai").
    ///
    /// Used for logging and provider selection. Must be lowercase,
    /// alphanumeric with underscores only.
    fn provider_id(&self) -> &str;

    /// Validate API credentials by making a lightweight test request.
    ///
    /// Returns false if credentials are invalid, expired, or lack
    /// transcription permissions.
    async fn verify_credentials(&self) -> std::result::Result<bool, Error>;
}
