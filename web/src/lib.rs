//! HTTP boundary for the speech-insight service.

pub(crate) mod controller;
pub mod error;
pub mod router;

pub use error::Error;
pub use service::AppState;

/// Build the application router over the given state.
pub fn init_router(app_state: AppState) -> axum::Router {
    router::define_routes(app_state)
}
