use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::MIN_FMT_CHUNK_SIZE;

/// Errors that can occur while scanning a directory of WAV files.
///
/// Only [`WavError::InvalidInputDirectory`] and [`WavError::Io`] abort a run;
/// the remaining variants describe a single malformed file and are logged and
/// skipped without affecting the rest of the batch.
#[derive(Debug, Error)]
pub enum WavError {
    /// The supplied input path is not a directory.
    #[error("input path '{}' is not a directory", .0.display())]
    InvalidInputDirectory(PathBuf),

    /// The file header tags are not `RIFF`/`WAVE`.
    #[error("not a RIFF/WAVE file")]
    NotWaveFormat,

    /// The `fmt ` chunk declares fewer bytes than the minimum PCM layout.
    #[error("fmt chunk size {0} is below the {MIN_FMT_CHUNK_SIZE} byte minimum")]
    FmtChunkTooSmall(u32),

    /// A read needed more bytes than the file has left.
    #[error("truncated input: {0}")]
    TruncatedInput(#[source] io::Error),

    /// An I/O failure outside the per-file parse (output writes, directory reads).
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl WavError {
    /// Whether this error condition skips a single file rather than the run.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            WavError::NotWaveFormat
                | WavError::FmtChunkTooSmall(_)
                | WavError::TruncatedInput(_)
        )
    }
}
