//! Streaming aggregation of a compressed Contents index.

use flate2::read::MultiGzDecoder;
use std::io::{BufRead, BufReader, Read};
use thiserror::Error;
use tracing::debug;

use super::parser::parse_line;
use super::structures::{OwnerCounts, ScanStats};

/// Errors raised while reading a compressed Contents index.
#[derive(Debug, Error)]
pub enum ContentsError {
    /// The stream is not valid gzip or could not be read to the end.
    #[error("Error reading gzip file: {0}")]
    Read(#[from] std::io::Error),
}

/// Result of scanning a complete index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub counts: OwnerCounts,
    pub stats: ScanStats,
}

/// Decompress `compressed` line by line and count files per package.
///
/// Only one line is held in memory at a time. Invalid UTF-8 is replaced
/// rather than rejected, so a stray byte never aborts the scan. Any gzip or
/// I/O failure aborts it and no counts are returned.
pub fn scan<R: Read>(compressed: R) -> Result<Scan, ContentsError> {
    let mut reader = BufReader::new(MultiGzDecoder::new(compressed));
    let mut buf = Vec::new();
    let mut counts = OwnerCounts::new();
    let mut stats = ScanStats::default();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // `\n`, `\r\n` and a lone `\r` all end a line.
        let chunk = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
        for raw in chunk.split(|&b| b == b'\r') {
            stats.lines += 1;

            let line = String::from_utf8_lossy(raw);
            match parse_line(&line) {
                Some(entry) => counts.record(&entry),
                None => stats.skipped += 1,
            }
        }
    }

    debug!(
        "Scanned {} lines ({} skipped), {} packages",
        stats.lines,
        stats.skipped,
        counts.len()
    );

    Ok(Scan { counts, stats })
}

/// Like [`scan`], keeping only the counts.
pub fn aggregate<R: Read>(compressed: R) -> Result<OwnerCounts, ContentsError> {
    scan(compressed).map(|scan| scan.counts)
}
