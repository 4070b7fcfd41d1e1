//! Speech AI abstraction layer for audio preparation, transcription, and
//! emotion classification providers.
//!
//! This crate provides trait-based abstractions for the speech-analysis
//! workflow:
//! - Audio preparers that normalize uploaded recordings into a
//!   transcription-ready waveform
//! - Speech-to-text transcription
//! - Text emotion classification over a fixed label vocabulary
//!
//! The design is provider-agnostic, enabling applications to swap between
//! service providers (AssemblyAI, Whisper, Hugging Face inference, local
//! models) without changing application code, and to substitute test
//! doubles at the same seams.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::audio::PreparedAudio;
pub use types::classification::LabelScore;
