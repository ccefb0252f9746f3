//! Text scanner for sync codes embedded in free-form input
//!
//! Labels, logs and spreadsheet exports tend to carry sync codes in the
//! middle of other text. The scanner anchors on hyphens, checks that the
//! surrounding bytes have the `AAAA-0000` shape, and runs each candidate
//! through the validator.

use crate::constants::{IDENTIFIER_LEN, PREFIX_LEN, SEPARATOR_BYTE};
use crate::types::SyncCode;
use crate::validator::SyncCodeValidator;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::Serialize;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// A sync code found at a specific position in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedCode {
    /// Byte offset of the series letter
    pub offset: usize,

    /// 1-based line number
    pub line: usize,

    /// The validated code
    pub code: SyncCode,

    /// The text as it appeared in the input
    pub raw: String,
}

/// Scan statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Total bytes scanned
    pub bytes_scanned: usize,

    /// Number of hyphens seen
    pub hyphens_seen: usize,

    /// Number of substrings with the `AAAA-0000` shape
    pub candidates_found: usize,

    /// Number of candidates that validated
    pub codes_found: usize,

    /// Number of candidates the validator rejected (usually unknown devices)
    pub rejected: usize,
}

impl ScanStats {
    /// Share of candidates that validated, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates_found == 0 {
            0.0
        } else {
            (self.codes_found as f64 / self.candidates_found as f64) * 100.0
        }
    }
}

/// Scan text for valid sync codes
///
/// Codes are returned in order of appearance. A candidate glued to further
/// letters, digits or underscores on either side is ignored, so
/// `XABTU-12345` yields nothing.
pub fn scan_text(validator: &SyncCodeValidator, text: &str) -> Vec<LocatedCode> {
    scan_text_with_stats(validator, text).0
}

/// Scan text with statistics
pub fn scan_text_with_stats(
    validator: &SyncCodeValidator,
    text: &str,
) -> (Vec<LocatedCode>, ScanStats) {
    let bytes = text.as_bytes();
    let mut stats = ScanStats {
        bytes_scanned: bytes.len(),
        ..Default::default()
    };
    let mut results = Vec::new();

    // Line tracking: newlines are counted incrementally between candidates
    let mut line = 1;
    let mut line_pos = 0;

    #[cfg(feature = "logging")]
    debug!("Starting text scan of {} bytes", bytes.len());

    for hyphen in memchr::memchr_iter(SEPARATOR_BYTE, bytes) {
        stats.hyphens_seen += 1;

        let Some(start) = candidate_at(bytes, hyphen) else {
            continue;
        };
        stats.candidates_found += 1;

        line += memchr::memchr_iter(b'\n', &bytes[line_pos..start]).count();
        line_pos = start;

        // Candidate bytes are all ASCII, so both ends are char boundaries
        let raw = &text[start..hyphen + 1 + IDENTIFIER_LEN];

        match validator.parse(raw) {
            Ok(code) => {
                #[cfg(feature = "logging")]
                trace!("Found {} at offset {} (line {})", code, start, line);

                results.push(LocatedCode {
                    offset: start,
                    line,
                    code,
                    raw: raw.to_string(),
                });
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                debug!("Rejected candidate at offset {}: {:?}", start, _e.kind());

                stats.rejected += 1;
            }
        }
    }

    stats.codes_found = results.len();

    #[cfg(feature = "logging")]
    debug!(
        "Scan complete: {} codes from {} candidates in {} bytes",
        stats.codes_found, stats.candidates_found, stats.bytes_scanned
    );

    (results, stats)
}

/// Return the start offset if the hyphen at `hyphen` anchors a candidate
fn candidate_at(bytes: &[u8], hyphen: usize) -> Option<usize> {
    let start = hyphen.checked_sub(PREFIX_LEN)?;
    let end = hyphen + 1 + IDENTIFIER_LEN;
    if end > bytes.len() {
        return None;
    }

    if !bytes[start..hyphen].iter().all(u8::is_ascii_alphabetic)
        || !bytes[hyphen + 1..end].iter().all(u8::is_ascii_digit)
    {
        return None;
    }

    let glued = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
    if start > 0 && glued(bytes[start - 1]) {
        return None;
    }
    if end < bytes.len() && glued(bytes[end]) {
        return None;
    }

    Some(start)
}
