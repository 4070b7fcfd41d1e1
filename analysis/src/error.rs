//! Error types for the `analysis` crate.
//!
//! Follows the root-Error-plus-kind-enum pattern used across the workspace:
//! a single `Error` struct holding an optional source for error chaining and
//! an `ErrorKind` describing what went wrong.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for analysis operations.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Kinds of errors the analysis pipeline can produce.
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The emotion classifier returned no labels. The classifier contract is
    /// to always return the full fixed vocabulary, so an empty result is an
    /// upstream violation rather than a scoring edge case.
    EmptyInput,
    /// A pipeline stage failed. Carries the identity of the offending stage;
    /// the underlying cause is preserved in `source`.
    Stage(Stage),
}

/// Identity of a pipeline stage, used to attribute failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Readability,
    Disfluency,
    Emotion,
    Persuasiveness,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Readability => write!(f, "readability"),
            Stage::Disfluency => write!(f, "disfluency"),
            Stage::Emotion => write!(f, "emotion"),
            Stage::Persuasiveness => write!(f, "persuasiveness"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::EmptyInput => write!(f, "Classifier returned no emotion labels"),
            ErrorKind::Stage(stage) => write!(f, "Analysis failed in the {} stage", stage),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Helper function to create empty-input errors.
pub fn empty_input_error() -> Error {
    Error {
        source: None,
        error_kind: ErrorKind::EmptyInput,
    }
}

/// Helper function to wrap a stage failure with the stage's identity.
pub fn stage_error(stage: Stage, source: Error) -> Error {
    Error {
        source: Some(Box::new(source)),
        error_kind: ErrorKind::Stage(stage),
    }
}
