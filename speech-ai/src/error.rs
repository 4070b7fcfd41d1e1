//! Error types for speech AI operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common
/// variants.
///
/// All provider implementations map their native errors to these variants,
/// preserving context while keeping a provider-agnostic interface, so the
/// layers above never match on provider-specific failures.
#[derive(Debug)]
pub enum Error {
    /// The uploaded recording could not be decoded or transcoded.
    /// Indicates an unsupported container/codec or a corrupt upload.
    AudioDecode(String),

    /// Upstream transcription failure, including an empty or garbled result.
    /// The recording reached the provider but no usable transcript came back.
    Transcription(String),

    /// Network connectivity issues, DNS failures, or connection timeouts.
    /// Typically transient; retry policy belongs to the caller's boundary.
    Network(String),

    /// Invalid parameters, missing credentials, or malformed configuration.
    /// These indicate a setup error and should be fixed at deploy time.
    Configuration(String),

    /// Provider-specific business logic errors (e.g. job rejected, model
    /// unavailable) that are not network failures.
    Provider(String),

    /// Operation exceeded the configured or provider-enforced timeout,
    /// including transcription jobs that never left the processing state.
    Timeout(String),

    /// Failed to serialize a request payload.
    Serialization(String),

    /// Failed to deserialize a provider response into the expected type.
    Deserialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AudioDecode(msg) => write!(f, "Audio decode failed: {}", msg),
            Error::Transcription(msg) => write!(f, "Transcription failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
