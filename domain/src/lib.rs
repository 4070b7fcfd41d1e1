//! Domain layer for the speech-insight service.
//!
//! Owns the concrete collaborator gateways (audio preparation,
//! transcription, emotion classification) and the request flow that wires
//! them into the pure analysis pipeline. The `web` layer depends on this
//! crate and never on the gateways' wire details directly.

pub mod error;
pub mod gateway;
pub mod speech;

pub use error::Error;
