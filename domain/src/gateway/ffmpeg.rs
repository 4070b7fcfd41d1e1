//! Audio preparation via an ffmpeg subprocess.
//!
//! Uploaded recordings arrive in arbitrary containers and codecs; ffmpeg
//! transcodes them into the 16 kHz mono WAV the transcription provider
//! consumes. Scratch files live in a preparer-owned temp directory that is
//! removed when the preparer drops.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::*;
use tempfile::TempDir;
use tokio::process::Command;

use speech_ai::traits::audio;
use speech_ai::types::audio::PreparedAudio;
use speech_ai::Error;

/// Sample rate of the normalized waveform.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;
/// Channel count of the normalized waveform.
pub const TARGET_CHANNELS: u16 = 1;

/// ffmpeg-backed audio preparer
pub struct FfmpegPreparer {
    ffmpeg_path: PathBuf,
    scratch: TempDir,
    sequence: AtomicU64,
}

impl FfmpegPreparer {
    /// Create a preparer running the ffmpeg binary at `ffmpeg_path`.
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let scratch = tempfile::tempdir().map_err(|e| {
            Error::Configuration(format!("Failed to create audio scratch directory: {e}"))
        })?;
        Ok(Self {
            ffmpeg_path: ffmpeg_path.into(),
            scratch,
            sequence: AtomicU64::new(0),
        })
    }

    fn next_paths(&self, filename: &str) -> (PathBuf, PathBuf) {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let extension = Path::new(filename)
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or("bin");
        let input = self
            .scratch
            .path()
            .join(format!("upload-{sequence}.{extension}"));
        let output = self.scratch.path().join(format!("prepared-{sequence}.wav"));
        (input, output)
    }
}

#[async_trait]
impl audio::Preparer for FfmpegPreparer {
    async fn prepare(&self, upload: &[u8], filename: &str) -> Result<PreparedAudio, Error> {
        if upload.is_empty() {
            return Err(Error::AudioDecode("Empty upload".to_string()));
        }

        let (input_path, output_path) = self.next_paths(filename);

        tokio::fs::write(&input_path, upload).await.map_err(|e| {
            Error::Other(Box::new(e))
        })?;

        debug!(
            "Transcoding {} ({} bytes) to {} Hz mono WAV",
            filename,
            upload.len(),
            TARGET_SAMPLE_RATE
        );

        let output = Command::new(&self.ffmpeg_path)
            .arg("-y")
            .arg("-i")
            .arg(&input_path)
            .args(["-ar", "16000", "-ac", "1"])
            .arg(&output_path)
            .output()
            .await
            .map_err(|e| {
                warn!("Failed to run ffmpeg at {:?}: {}", self.ffmpeg_path, e);
                Error::Configuration(format!("Failed to run ffmpeg: {e}"))
            })?;

        // The input copy is no longer needed whether or not the transcode
        // succeeded.
        let _ = tokio::fs::remove_file(&input_path).await;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("ffmpeg rejected upload {}: {}", filename, stderr.trim());
            return Err(Error::AudioDecode(format!(
                "ffmpeg could not decode the upload: {}",
                last_line(&stderr)
            )));
        }

        Ok(PreparedAudio::new(
            output_path,
            TARGET_SAMPLE_RATE,
            TARGET_CHANNELS,
        ))
    }
}

/// ffmpeg's stderr is verbose; the final line carries the actual failure.
fn last_line(stderr: &str) -> &str {
    stderr.trim().lines().last().unwrap_or("unknown error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use speech_ai::traits::audio::Preparer;

    #[tokio::test]
    async fn test_empty_upload_is_rejected() {
        let preparer = FfmpegPreparer::new("ffmpeg").unwrap();
        let err = preparer.prepare(&[], "sound.mp3").await.unwrap_err();
        assert!(matches!(err, Error::AudioDecode(_)));
    }

    #[tokio::test]
    async fn test_missing_binary_is_configuration_error() {
        let preparer = FfmpegPreparer::new("/nonexistent/ffmpeg-binary").unwrap();
        let err = preparer.prepare(b"RIFFdata", "sound.wav").await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_scratch_paths_are_unique_and_keep_extension() {
        let preparer = FfmpegPreparer::new("ffmpeg").unwrap();
        let (input_a, output_a) = preparer.next_paths("talk.mp3");
        let (input_b, _) = preparer.next_paths("talk.mp3");
        assert_ne!(input_a, input_b);
        assert_eq!(input_a.extension().and_then(OsStr::to_str), Some("mp3"));
        assert_eq!(output_a.extension().and_then(OsStr::to_str), Some("wav"));
    }

    #[test]
    fn test_last_line_picks_diagnostic() {
        let stderr = "ffmpeg version 6.0\nStream mapping:\nInvalid data found when processing input";
        assert_eq!(last_line(stderr), "Invalid data found when processing input");
    }
}
