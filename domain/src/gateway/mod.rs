//! Concrete collaborator gateways.
//!
//! Each gateway maps its native failures into the provider-agnostic
//! `speech_ai::Error` variants at the call site, so nothing above this
//! module handles provider-specific error shapes.

pub mod assembly_ai;
pub mod ffmpeg;
pub mod hugging_face;

use speech_ai::Error;

/// Map a reqwest failure to a provider error.
///
/// Client-builder failures are configuration mistakes; everything else is
/// treated as a network-level failure.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    if err.is_builder() {
        Error::Configuration(format!("Failed to build HTTP client: {err}"))
    } else if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else {
        Error::Network(err.to_string())
    }
}
