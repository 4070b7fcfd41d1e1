//! Core speech-quality analysis pipeline.
//!
//! This crate turns a transcript into the derived metrics of a speech
//! quality report:
//! - Lexical scanning for disfluencies and persuasive language
//! - Flesch Reading Ease readability scoring
//! - Emotion-score aggregation over classifier output
//! - Bounded persuasiveness scoring
//!
//! Everything here is pure computation: no I/O, no async, no shared mutable
//! state. Lexicons are compiled once and are read-only afterwards, so a
//! single `AnalysisPipeline` can be shared across concurrent requests.

pub mod emotion;
pub mod error;
pub mod lexicon;
pub mod persuasion;
pub mod pipeline;
pub mod readability;

// Re-export commonly used types
pub use emotion::EmotionProbability;
pub use error::{Error, ErrorKind, Stage};
pub use lexicon::Lexicon;
pub use pipeline::{AnalysisPipeline, AnalysisReport};
