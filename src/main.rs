use std::sync::Arc;
use std::time::Duration;

use log::*;

use analysis::AnalysisPipeline;
use domain::gateway::assembly_ai::AssemblyAiClient;
use domain::gateway::ffmpeg::FfmpegPreparer;
use domain::gateway::hugging_face::HuggingFaceClient;
use service::config::Config;
use service::logging::Logger;
use service::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new();
    Logger::init_logger(&config);

    info!("Starting speech-insight ({})", config.runtime_env());

    let assembly_ai_api_key = config
        .assembly_ai_api_key()
        .ok_or("ASSEMBLY_AI_API_KEY is not configured")?;
    let hugging_face_api_key = config
        .hugging_face_api_key()
        .ok_or("HUGGING_FACE_API_KEY is not configured")?;

    let transcriber = AssemblyAiClient::new(
        &assembly_ai_api_key,
        config.assembly_ai_base_url(),
        Duration::from_secs(config.transcript_poll_interval_secs),
        config.transcript_poll_max_attempts,
    )?
    .with_speech_model(Some(config.assembly_ai_speech_model().to_string()));

    let emotion_classifier = HuggingFaceClient::new(
        &hugging_face_api_key,
        config.hugging_face_base_url(),
        config.emotion_model(),
    )?;

    let audio_preparer = FfmpegPreparer::new(config.ffmpeg_path.clone())?;
    let analysis_pipeline = AnalysisPipeline::with_default_lexicons()?;

    let interface = config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = config.port;

    let app_state = AppState::new(
        config,
        Arc::new(audio_preparer),
        Arc::new(transcriber),
        Arc::new(emotion_classifier),
        Arc::new(analysis_pipeline),
    );

    let router = web::init_router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("{interface}:{port}")).await?;
    info!("Server starting... listening for requests on http://{interface}:{port}");
    axum::serve(listener, router).await?;

    Ok(())
}
