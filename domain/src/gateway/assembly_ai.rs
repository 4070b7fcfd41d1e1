//! AssemblyAI API client for transcription services.
//!
//! This module provides an HTTP client for interacting with the AssemblyAI
//! API to transcribe uploaded recordings: raw audio bytes go to the upload
//! endpoint, a transcript job is created against the returned URL, and the
//! job is polled until it reaches a terminal state.

use std::time::Duration;

use async_trait::async_trait;
use log::*;
use serde::{Deserialize, Serialize};

use speech_ai::traits::transcription;
use speech_ai::types::audio::PreparedAudio;
use speech_ai::types::transcription::{Status, Transcription};
use speech_ai::Error;

use super::transport_error;

/// Request to create a new transcription
#[derive(Debug, Serialize)]
pub struct CreateTranscriptRequest {
    pub audio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Response from the upload endpoint
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub upload_url: String,
}

/// Response from creating or polling a transcript
#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    pub id: String,
    pub status: TranscriptStatus,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub audio_duration: Option<i64>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Transcript processing status
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

impl From<TranscriptStatus> for Status {
    fn from(status: TranscriptStatus) -> Self {
        match status {
            TranscriptStatus::Queued => Status::Queued,
            TranscriptStatus::Processing => Status::Processing,
            TranscriptStatus::Completed => Status::Completed,
            TranscriptStatus::Error => Status::Failed,
        }
    }
}

impl From<TranscriptResponse> for Transcription {
    fn from(response: TranscriptResponse) -> Self {
        Transcription {
            id: response.id,
            status: response.status.into(),
            text: response.text,
            confidence: response.confidence,
            duration_seconds: response.audio_duration,
            language_code: response.language_code,
            error_message: response.error,
        }
    }
}

/// AssemblyAI API client
pub struct AssemblyAiClient {
    client: reqwest::Client,
    base_url: String,
    speech_model: Option<String>,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl AssemblyAiClient {
    /// Create a new AssemblyAI client with the given API key and base URL
    pub fn new(
        api_key: &str,
        base_url: &str,
        poll_interval: Duration,
        max_poll_attempts: u32,
    ) -> Result<Self, Error> {
        let mut headers = reqwest::header::HeaderMap::new();

        let mut header_value = reqwest::header::HeaderValue::from_str(api_key).map_err(|e| {
            warn!("Failed to create auth header: {:?}", e);
            Error::Configuration("Invalid API key format".to_string())
        })?;
        header_value.set_sensitive(true);
        headers.insert("authorization", header_value);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            speech_model: Some("slam-1".to_string()),
            poll_interval,
            max_poll_attempts,
        })
    }

    /// Override the speech model requested for new transcripts.
    pub fn with_speech_model(mut self, speech_model: Option<String>) -> Self {
        self.speech_model = speech_model;
        self
    }

    /// Verify the API key is valid by making a test request
    pub async fn verify_api_key(&self) -> Result<bool, Error> {
        let url = format!("{}/transcript", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Failed to verify AssemblyAI API key: {:?}", e);
            transport_error(e)
        })?;

        // 200 means valid key (returns list of transcripts)
        // 401 means invalid key
        Ok(response.status().is_success())
    }

    /// Upload raw audio bytes, returning the provider-hosted URL to
    /// transcribe from.
    pub async fn upload_audio(&self, audio: Vec<u8>) -> Result<UploadResponse, Error> {
        let url = format!("{}/upload", self.base_url);

        debug!("Uploading {} bytes to AssemblyAI", audio.len());

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to upload audio to AssemblyAI: {:?}", e);
                transport_error(e)
            })?;

        if response.status().is_success() {
            let upload: UploadResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse AssemblyAI upload response: {:?}", e);
                Error::Deserialization("Invalid upload response from AssemblyAI".to_string())
            })?;
            debug!("AssemblyAI upload complete");
            Ok(upload)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("AssemblyAI upload API: {}", error_text);
            Err(Error::Provider(error_text))
        }
    }

    /// Create a new transcription request
    pub async fn create_transcript(
        &self,
        request: CreateTranscriptRequest,
    ) -> Result<TranscriptResponse, Error> {
        let url = format!("{}/transcript", self.base_url);

        debug!(
            "Creating AssemblyAI transcript for audio: {}",
            request.audio_url
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to create AssemblyAI transcript: {:?}", e);
                transport_error(e)
            })?;

        if response.status().is_success() {
            let transcript: TranscriptResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse AssemblyAI response: {:?}", e);
                Error::Deserialization("Invalid response from AssemblyAI".to_string())
            })?;
            info!("Created AssemblyAI transcript with ID: {}", transcript.id);
            Ok(transcript)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("AssemblyAI API: {}", error_text);
            Err(Error::Provider(error_text))
        }
    }

    /// Get the status of a transcript
    pub async fn get_transcript(&self, transcript_id: &str) -> Result<TranscriptResponse, Error> {
        let url = format!("{}/transcript/{}", self.base_url, transcript_id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Failed to get AssemblyAI transcript: {:?}", e);
            transport_error(e)
        })?;

        if response.status().is_success() {
            let transcript: TranscriptResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse AssemblyAI response: {:?}", e);
                Error::Deserialization("Invalid response from AssemblyAI".to_string())
            })?;
            Ok(transcript)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("AssemblyAI API: {}", error_text);
            Err(Error::Provider(error_text))
        }
    }

    /// Poll a transcript until it reaches a terminal state.
    ///
    /// Returns the completed transcript, a transcription error when the
    /// provider reports failure, or a timeout once the attempt budget is
    /// exhausted.
    pub async fn wait_for_completion(&self, transcript_id: &str) -> Result<TranscriptResponse, Error> {
        for attempt in 0..self.max_poll_attempts {
            let transcript = self.get_transcript(transcript_id).await?;
            match transcript.status {
                TranscriptStatus::Completed => return Ok(transcript),
                TranscriptStatus::Error => {
                    let message = transcript
                        .error
                        .unwrap_or_else(|| "Transcription failed".to_string());
                    error!("AssemblyAI transcript {} failed: {}", transcript_id, message);
                    return Err(Error::Transcription(message));
                }
                TranscriptStatus::Queued | TranscriptStatus::Processing => {
                    debug!(
                        "AssemblyAI transcript {} pending (attempt {}/{})",
                        transcript_id,
                        attempt + 1,
                        self.max_poll_attempts
                    );
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }

        Err(Error::Timeout(format!(
            "Transcript {} did not complete within {} poll attempts",
            transcript_id, self.max_poll_attempts
        )))
    }
}

#[async_trait]
impl transcription::Provider for AssemblyAiClient {
    async fn transcribe(&self, audio: &PreparedAudio) -> Result<Transcription, Error> {
        let bytes = tokio::fs::read(audio.path()).await.map_err(|e| {
            warn!("Failed to read prepared audio {:?}: {}", audio.path(), e);
            Error::AudioDecode(format!("Prepared audio unreadable: {e}"))
        })?;

        let upload = self.upload_audio(bytes).await?;
        let created = self
            .create_transcript(CreateTranscriptRequest {
                audio_url: upload.upload_url,
                speech_model: self.speech_model.clone(),
                language_code: None,
            })
            .await?;
        let finished = self.wait_for_completion(&created.id).await?;

        Ok(finished.into())
    }

    fn provider_id(&self) -> &str {
        "assemblyai"
    }

    async fn verify_credentials(&self) -> Result<bool, Error> {
        self.verify_api_key().await
    }
}
