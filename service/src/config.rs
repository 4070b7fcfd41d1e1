use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;

/// Default AssemblyAI API base URL used when `ASSEMBLY_AI_BASE_URL` is not set.
pub const DEFAULT_ASSEMBLY_AI_BASE_URL: &str = "https://api.assemblyai.com/v2";

/// Default Hugging Face inference API base URL.
pub const DEFAULT_HUGGING_FACE_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default emotion classification model.
pub const DEFAULT_EMOTION_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The API key to use when calling the AssemblyAI transcription API.
    #[arg(long, env)]
    assembly_ai_api_key: Option<String>,

    /// The base URL of the AssemblyAI API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_ASSEMBLY_AI_BASE_URL)]
    assembly_ai_base_url: String,

    /// The AssemblyAI speech model requested for new transcripts.
    #[arg(long, env, default_value = "slam-1")]
    assembly_ai_speech_model: String,

    /// Seconds to wait between transcript status polls.
    #[arg(long, env, default_value_t = 3)]
    pub transcript_poll_interval_secs: u64,

    /// Maximum number of transcript status polls before giving up.
    #[arg(long, env, default_value_t = 100)]
    pub transcript_poll_max_attempts: u32,

    /// The API key to use when calling the Hugging Face inference API.
    #[arg(long, env)]
    hugging_face_api_key: Option<String>,

    /// The base URL of the Hugging Face inference API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_HUGGING_FACE_BASE_URL)]
    hugging_face_base_url: String,

    /// The emotion classification model id.
    #[arg(long, env, default_value = DEFAULT_EMOTION_MODEL)]
    emotion_model: String,

    /// Path to the ffmpeg binary used to normalize uploaded audio.
    #[arg(long, env, default_value = "ffmpeg")]
    pub ffmpeg_path: String,

    /// Maximum accepted upload size in bytes.
    #[arg(long, env, default_value_t = 25 * 1024 * 1024)]
    pub max_upload_bytes: usize,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the AssemblyAI API key, if configured.
    pub fn assembly_ai_api_key(&self) -> Option<String> {
        self.assembly_ai_api_key.clone()
    }

    /// Returns the AssemblyAI API base URL.
    pub fn assembly_ai_base_url(&self) -> &str {
        &self.assembly_ai_base_url
    }

    /// Returns the AssemblyAI speech model for new transcripts.
    pub fn assembly_ai_speech_model(&self) -> &str {
        &self.assembly_ai_speech_model
    }

    /// Returns the Hugging Face API key, if configured.
    pub fn hugging_face_api_key(&self) -> Option<String> {
        self.hugging_face_api_key.clone()
    }

    /// Returns the Hugging Face inference API base URL.
    pub fn hugging_face_base_url(&self) -> &str {
        &self.hugging_face_base_url
    }

    /// Returns the emotion classification model id.
    pub fn emotion_model(&self) -> &str {
        &self.emotion_model
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["speech-insight"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.assembly_ai_base_url(), DEFAULT_ASSEMBLY_AI_BASE_URL);
        assert_eq!(config.hugging_face_base_url(), DEFAULT_HUGGING_FACE_BASE_URL);
        assert_eq!(config.emotion_model(), DEFAULT_EMOTION_MODEL);
        assert_eq!(config.transcript_poll_max_attempts, 100);
        assert_eq!(config.runtime_env, RustEnv::Development);
        assert!(config.assembly_ai_api_key().is_none());
    }

    #[test]
    fn test_allowed_origins_are_comma_delimited() {
        let config = parse(&["--allowed-origins", "https://a.example,https://b.example"]);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_runtime_env_parses_case_insensitively() {
        assert_eq!("PRODUCTION".parse::<RustEnv>().unwrap(), RustEnv::Production);
        assert_eq!("staging".parse::<RustEnv>().unwrap(), RustEnv::Staging);
        assert!("qa".parse::<RustEnv>().is_err());
    }

    #[test]
    fn test_is_production() {
        let config = parse(&["--runtime-env", "production"]);
        assert!(config.is_production());
    }
}
