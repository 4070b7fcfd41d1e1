use crate::controller::{analysis_controller, health_check_controller};
use crate::AppState;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use log::*;
use tower_http::cors::CorsLayer;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Speech Insight API"
        ),
        paths(
            analysis_controller::analyze_audio,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                analysis::AnalysisReport,
                analysis::EmotionProbability,
                crate::error::ErrorBody,
            )
        ),
        tags(
            (name = "speech_insight", description = "Speech quality analysis API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let max_upload_bytes = app_state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health_check_controller::health_check))
        .route("/analyze-audio", post(analysis_controller::analyze_audio))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors_layer(&app_state.config.allowed_origins))
        .with_state(app_state)
}

/// CORS layer allowing the configured origins; origins that fail to parse
/// are skipped with a warning rather than aborting startup.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping unparseable CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(origins)
        .allow_credentials(true)
}
