use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};

extern crate log;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A failure bubbled up from the domain layer.
    Domain(DomainError),
    /// The request itself was malformed (e.g. missing multipart field).
    InvalidRequest(String),
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

/// JSON error body returned on every failure.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

// Each domain error kind maps to exactly one status; the boundary never
// returns a stringified internal error to the client.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::InvalidRequest(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            Error::Domain(domain_error) => {
                log::warn!("Request failed: {domain_error:?}");
                match domain_error.error_kind {
                    DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                        InternalErrorKind::Analysis(_) => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Analysis failed".to_string(),
                        ),
                        InternalErrorKind::Config => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Service is misconfigured".to_string(),
                        ),
                        InternalErrorKind::Other(_) => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error".to_string(),
                        ),
                    },
                    DomainErrorKind::External(external_error_kind) => match external_error_kind {
                        ExternalErrorKind::AudioDecode => (
                            StatusCode::UNPROCESSABLE_ENTITY,
                            "Could not decode the uploaded audio".to_string(),
                        ),
                        ExternalErrorKind::Transcription => (
                            StatusCode::BAD_GATEWAY,
                            "Transcription service failed".to_string(),
                        ),
                        ExternalErrorKind::Classification => (
                            StatusCode::BAD_GATEWAY,
                            "Emotion classification service failed".to_string(),
                        ),
                        ExternalErrorKind::Network => (
                            StatusCode::BAD_GATEWAY,
                            "Upstream service unreachable".to_string(),
                        ),
                        ExternalErrorKind::Other(_) => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error".to_string(),
                        ),
                    },
                }
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self::Domain(err.into())
    }
}
