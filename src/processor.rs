use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};

use crate::error::WavError;
use crate::format::{extract_format, FmtData};
use crate::output::{descriptor_path, write_descriptor};
use crate::riff::ChunkReader;

/// Counts for one directory run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of `.wav` files examined.
    pub scanned: usize,
    /// Number of descriptors written.
    pub written: usize,
}

/// Scan `input_dir` for `.wav` files and write one XML descriptor per valid
/// file into `output_dir`.
///
/// Malformed or truncated files are logged and skipped; they never abort the
/// batch. Only a bad input path or an environment-level I/O failure (reading
/// the directory, writing a descriptor) fails the whole run.
pub fn process_directory(input_dir: &Path, output_dir: &Path) -> Result<ScanSummary, WavError> {
    if !input_dir.is_dir() {
        return Err(WavError::InvalidInputDirectory(input_dir.to_path_buf()));
    }

    let mut summary = ScanSummary::default();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !is_wav_file(&path) {
            continue;
        }
        summary.scanned += 1;
        info!("parsing {}", path.display());

        match process_file(&path) {
            Ok(Some(data)) => {
                write_descriptor(&descriptor_path(output_dir, &path), &data)?;
                summary.written += 1;
            }
            Ok(None) => {
                info!("skipping {}: no fmt chunk found", path.display());
            }
            Err(e) if e.is_per_file() => {
                warn!("skipping {}: {}", path.display(), e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(summary)
}

/// Parse a single WAV file into its format metadata.
///
/// The file handle is scoped to this call and released on every exit path.
pub fn process_file(path: &Path) -> Result<Option<FmtData>, WavError> {
    let file = File::open(path)?;
    let mut reader = ChunkReader::new(BufReader::new(file));
    extract_format(&mut reader)
}

fn is_wav_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}
