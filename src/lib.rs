//! Extract format metadata from WAV files.
//!
//! Walks a RIFF/WAVE container chunk by chunk, decodes the `fmt ` sub-chunk,
//! and renders the result as an XML descriptor. The chunk parsing is done by
//! hand; no decoding library is involved.

pub mod error;
pub mod format;
pub mod output;
pub mod processor;
pub mod riff;

pub use error::WavError;
pub use format::{AudioFormat, FmtData};
pub use processor::{process_directory, ScanSummary};
