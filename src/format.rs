use std::fmt;
use std::io::{BufRead, Seek};

use log::debug;

use crate::error::WavError;
use crate::riff::{ChunkReader, FMT_TAG, RIFF_TAG, WAVE_TAG};

/// Minimum byte length of a `fmt ` chunk (the plain PCM layout).
pub const MIN_FMT_CHUNK_SIZE: u32 = 16;

/// Audio encoding as reported by the fmt chunk's format code.
///
/// Code 1 is PCM; every other code is lumped together as compressed, since the
/// descriptor does not distinguish individual codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Pcm,
    Compressed,
}

impl AudioFormat {
    pub fn from_code(code: u16) -> Self {
        if code == 1 {
            AudioFormat::Pcm
        } else {
            AudioFormat::Compressed
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Pcm => write!(f, "PCM"),
            AudioFormat::Compressed => write!(f, "Compressed"),
        }
    }
}

/// Format metadata extracted from one WAV file's `fmt ` chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmtData {
    pub audio_format: AudioFormat,
    pub channel_count: u16,
    /// Sampling rate in Hz.
    pub sampling_rate: u32,
    /// Byte rate as declared in the file, not recomputed.
    pub byte_rate: u32,
    /// Bits per sample.
    pub bit_depth: u16,
    /// Derived `sampling_rate * channel_count * bit_depth`, in bits per
    /// second. Deliberately not divided by 8 to match the published
    /// descriptor schema.
    pub bit_rate: u64,
}

impl FmtData {
    /// Decode the first 16 bytes of a `fmt ` chunk body (all little-endian).
    fn decode(payload: &[u8; 16]) -> Self {
        let format_code = u16::from_le_bytes([payload[0], payload[1]]);
        let channel_count = u16::from_le_bytes([payload[2], payload[3]]);
        let sampling_rate =
            u32::from_le_bytes([payload[4], payload[5], payload[6], payload[7]]);
        let byte_rate =
            u32::from_le_bytes([payload[8], payload[9], payload[10], payload[11]]);
        // Bytes 12..14 hold the block alignment, which the descriptor omits.
        let bit_depth = u16::from_le_bytes([payload[14], payload[15]]);
        FmtData {
            audio_format: AudioFormat::from_code(format_code),
            channel_count,
            sampling_rate,
            byte_rate,
            bit_depth,
            bit_rate: u64::from(sampling_rate)
                * u64::from(channel_count)
                * u64::from(bit_depth),
        }
    }
}

/// Walk one WAV stream and extract its format metadata.
///
/// Validates the outer `RIFF`/`WAVE` tags, then iterates chunks, skipping
/// everything up to the first `fmt ` chunk of at least
/// [`MIN_FMT_CHUNK_SIZE`] bytes. Processing stops at that chunk; anything
/// after it is never read.
///
/// Returns `Ok(None)` when end-of-stream is reached without finding a fmt
/// chunk. All errors describe this file only; the caller decides whether to
/// continue with other files.
pub fn extract_format<R: BufRead + Seek>(
    reader: &mut ChunkReader<R>,
) -> Result<Option<FmtData>, WavError> {
    let (tag, format) = match reader.read_file_header() {
        Ok(header) => header,
        // A file too short to hold the 12-byte header is not a WAV file.
        Err(WavError::TruncatedInput(_)) => return Err(WavError::NotWaveFormat),
        Err(e) => return Err(e),
    };
    if tag != RIFF_TAG || format != WAVE_TAG {
        return Err(WavError::NotWaveFormat);
    }

    while !reader.at_end()? {
        let header = reader.read_chunk_header()?;
        if header.id == FMT_TAG {
            if header.size < MIN_FMT_CHUNK_SIZE {
                return Err(WavError::FmtChunkTooSmall(header.size));
            }
            let mut payload = [0u8; 16];
            reader.read_bytes(&mut payload)?;
            return Ok(Some(FmtData::decode(&payload)));
        }
        debug!(
            "skipping '{}' chunk ({} bytes)",
            header.id.escape_ascii(),
            header.size
        );
        reader.skip_chunk(header.size)?;
    }
    Ok(None)
}
