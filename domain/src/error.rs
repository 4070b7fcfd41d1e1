//! Error types for the `domain` layer.
//!
//! Errors in the domain layer are modeled as a tree with
//! `domain::error::Error` as the root type holding `error_kind` enums for
//! the kinds of errors that can occur here or in lower layers. The `source`
//! field holds the original error that caused the domain error. The intent
//! is to translate errors between layers while maintaining layer
//! boundaries: `domain` depends on `analysis` and `speech-ai`, `web`
//! depends on `domain`, but `web` never matches on lower-layer error types
//! directly. The `error_kind` tree is ultimately what `web` uses to pick
//! HTTP status codes and messages.

use analysis::error::{Error as AnalysisError, ErrorKind as AnalysisKind};
use speech_ai::error::Error as ProviderError;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Major categories of errors in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Errors originating inside this process.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Analysis(AnalysisErrorKind),
    Config,
    Other(String),
}

/// Analysis-pipeline errors translated up from the `analysis` crate,
/// reduced to the kinds relevant at this layer.
#[derive(Debug, PartialEq)]
pub enum AnalysisErrorKind {
    /// The classifier returned no labels (upstream contract violation).
    EmptyClassifierOutput,
    /// A pipeline stage failed; carries the stage name.
    Stage(String),
}

/// Errors originating in external collaborators.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// Unsupported or corrupt uploaded audio.
    AudioDecode,
    /// Upstream transcription failure, including empty or garbled results.
    Transcription,
    /// Upstream emotion-classification failure.
    Classification,
    Network,
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `analysis` layer to the
// `domain` layer.
impl From<AnalysisError> for Error {
    fn from(err: AnalysisError) -> Self {
        let analysis_error_kind = match &err.error_kind {
            AnalysisKind::EmptyInput => AnalysisErrorKind::EmptyClassifierOutput,
            AnalysisKind::Stage(stage) => AnalysisErrorKind::Stage(stage.to_string()),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Analysis(analysis_error_kind)),
        }
    }
}

// Provider errors default to the audio/transcription path, which covers the
// preparer and transcriber collaborators. Classifier call sites use
// `classification_error` instead, since the provider error type itself does
// not say which collaborator produced it.
impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        let error_kind = match &err {
            ProviderError::AudioDecode(_) => {
                DomainErrorKind::External(ExternalErrorKind::AudioDecode)
            }
            ProviderError::Network(_) => DomainErrorKind::External(ExternalErrorKind::Network),
            ProviderError::Configuration(_) => DomainErrorKind::Internal(InternalErrorKind::Config),
            ProviderError::Transcription(_)
            | ProviderError::Provider(_)
            | ProviderError::Timeout(_) => {
                DomainErrorKind::External(ExternalErrorKind::Transcription)
            }
            ProviderError::Serialization(_) | ProviderError::Deserialization(_) => {
                DomainErrorKind::External(ExternalErrorKind::Other(
                    "Invalid provider payload".to_string(),
                ))
            }
            ProviderError::Other(_) => {
                DomainErrorKind::External(ExternalErrorKind::Other("Provider error".to_string()))
            }
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Translate a provider error raised by the emotion classifier.
pub fn classification_error(err: ProviderError) -> Error {
    let error_kind = match &err {
        ProviderError::Network(_) => DomainErrorKind::External(ExternalErrorKind::Network),
        ProviderError::Configuration(_) => DomainErrorKind::Internal(InternalErrorKind::Config),
        _ => DomainErrorKind::External(ExternalErrorKind::Classification),
    };
    Error {
        source: Some(Box::new(err)),
        error_kind,
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client
        // instance occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to build reqwest client".to_string(),
                )),
            }
        } else {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        }
    }
}
