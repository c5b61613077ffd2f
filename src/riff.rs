use std::io::{self, BufRead, Seek, SeekFrom};

use crate::error::WavError;

/// Tag of the outer RIFF container.
pub const RIFF_TAG: [u8; 4] = *b"RIFF";
/// Container format tag identifying a WAVE file.
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
/// Tag of the format sub-chunk, trailing space included.
pub const FMT_TAG: [u8; 4] = *b"fmt ";

/// Header of a single chunk inside a RIFF container: a 4-byte ASCII tag
/// followed by the byte length of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

/// Binary cursor over one open RIFF stream.
///
/// The reader only manages position: it hands out headers and skips bodies,
/// leaving interpretation of chunk contents to the caller. Skips are not
/// validated against the remaining file length; a skip past end-of-file makes
/// the next read report [`WavError::TruncatedInput`] instead.
pub struct ChunkReader<R> {
    inner: R,
}

impl<R: BufRead + Seek> ChunkReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read the 12-byte RIFF file header, returning the container tag and the
    /// format tag. The declared file size between them is discarded.
    pub fn read_file_header(&mut self) -> Result<([u8; 4], [u8; 4]), WavError> {
        let mut header = [0u8; 12];
        self.read_bytes(&mut header)?;
        let tag = [header[0], header[1], header[2], header[3]];
        let format = [header[8], header[9], header[10], header[11]];
        Ok((tag, format))
    }

    /// Read the next chunk header: 4-byte tag plus little-endian u32 body
    /// length. Fails with [`WavError::TruncatedInput`] when fewer than 8
    /// bytes remain.
    pub fn read_chunk_header(&mut self) -> Result<ChunkHeader, WavError> {
        let mut header = [0u8; 8];
        self.read_bytes(&mut header)?;
        let id = [header[0], header[1], header[2], header[3]];
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        Ok(ChunkHeader { id, size })
    }

    /// Advance the cursor exactly `size` bytes without interpreting content.
    ///
    /// A size exceeding the remaining file length is tolerated; the next read
    /// then reports truncation.
    pub fn skip_chunk(&mut self, size: u32) -> Result<(), WavError> {
        self.inner.seek(SeekFrom::Current(i64::from(size)))?;
        Ok(())
    }

    /// Fill `buf` from the stream, mapping a short read to
    /// [`WavError::TruncatedInput`].
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), WavError> {
        self.inner.read_exact(buf).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => WavError::TruncatedInput(e),
            _ => WavError::Io(e),
        })
    }

    /// True when the cursor is at or past end-of-file.
    pub fn at_end(&mut self) -> Result<bool, WavError> {
        Ok(self.inner.fill_buf()?.is_empty())
    }
}
