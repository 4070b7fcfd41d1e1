//! Audio preparation trait.

use crate::types::audio::PreparedAudio;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for converting uploaded audio into a transcription-ready
/// waveform.
///
/// Implementations accept arbitrary container/codec uploads and produce a
/// normalized waveform file. The reference implementation shells out to
/// ffmpeg; a test double can return a fixture path without touching disk.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Preparer: Send + Sync {
    /// Decode and normalize one uploaded recording.
    ///
    /// `filename` is the client-supplied name, used only to pick a decode
    /// hint from its extension. Unsupported or corrupt input surfaces as
    /// [`Error::AudioDecode`].
    async fn prepare(
        &self,
        upload: &[u8],
        filename: &str,
    ) -> std::result::Result<PreparedAudio, Error>;
}
