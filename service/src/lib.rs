use std::sync::Arc;

use analysis::AnalysisPipeline;
use config::Config;
use speech_ai::traits::{audio, classification, transcription};

pub mod config;
pub mod logging;

// Service-level state containing the configuration, the shared analysis
// pipeline, and the collaborator handles. Needs to implement Clone to be
// able to be passed into Router as State; everything inside is read-only
// after startup, so clones are cheap Arc bumps.
#[derive(Clone)]
pub struct AppState {
    pub audio_preparer: Arc<dyn audio::Preparer>,
    pub transcriber: Arc<dyn transcription::Provider>,
    pub emotion_classifier: Arc<dyn classification::Provider>,
    pub analysis_pipeline: Arc<AnalysisPipeline>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        config: Config,
        audio_preparer: Arc<dyn audio::Preparer>,
        transcriber: Arc<dyn transcription::Provider>,
        emotion_classifier: Arc<dyn classification::Provider>,
        analysis_pipeline: Arc<AnalysisPipeline>,
    ) -> Self {
        Self {
            audio_preparer,
            transcriber,
            emotion_classifier,
            analysis_pipeline,
            config,
        }
    }
}
