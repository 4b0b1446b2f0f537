use frx_types::{ImageSniffer, ResourceRecord};
use frx_wire::keys::IMAGE_KEY;
use frx_wire::primitive::read_u32_le;

use crate::error::ScanError;
use crate::image_record;
use crate::list_record::{self, ListOutcome};
use crate::sniff::CodecSniffer;

/// The result of scanning one container buffer.
///
/// Fatal errors do not discard work: whatever records were decoded
/// before the failure point stay in `records`, and `outcome` says
/// whether the buffer was walked to the end.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ ScanReport                                           │
/// │   records: Vec<ResourceRecord> ← encounter order     │
/// │   outcome: Complete | Aborted(ScanError)             │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct ScanReport {
    /// Records in the order they were encountered in the buffer.
    pub records: Vec<ResourceRecord>,

    /// Terminal status of the scan.
    pub outcome: ScanOutcome,
}

/// Terminal status of a scan.
#[derive(Debug)]
pub enum ScanOutcome {
    /// The cursor reached the end of the buffer.
    Complete,

    /// A fatal classification or bounds error stopped the scan early.
    Aborted(ScanError),
}

impl ScanReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Complete)
    }

    /// Collapse the report into a `Result`, discarding partial records
    /// on failure. Callers that want the partial output inspect the
    /// fields directly instead.
    ///
    /// # Errors
    ///
    /// The [`ScanError`] that aborted the scan.
    pub fn into_result(self) -> Result<Vec<ResourceRecord>, ScanError> {
        match self.outcome {
            ScanOutcome::Complete => Ok(self.records),
            ScanOutcome::Aborted(err) => Err(err),
        }
    }
}

/// Synchronous `.frx` container scanner.
///
/// Walks the byte buffer front to back, classifying each record by the
/// key field at `offset + 4` and dispatching to the matching decoder:
///
///   1. Key equals [`IMAGE_KEY`] — fixed-length image record, size
///      stored explicitly ([`crate::image_record`]).
///   2. Anything else — variable-length list-record slot: empty padding,
///      a marker-delimited item, or a fatal unknown key
///      ([`crate::list_record`]).
///
/// Each decoded slot consumes at least one byte, so the loop terminates
/// on any finite input. The scan is deterministic and performs no I/O;
/// concurrent scans of different buffers are safe to run in parallel.
///
/// # Example
///
/// ```rust
/// use frx_decoder::FrxScanner;
///
/// // One image record: 4-byte lead-in, key, size=3, payload.
/// let mut buf = vec![0u8; 4];
/// buf.extend_from_slice(&[0x6C, 0x74, 0x00, 0x00]);
/// buf.extend_from_slice(&3u32.to_le_bytes());
/// buf.extend_from_slice(b"\x01\x02\x03");
///
/// let report = FrxScanner::scan(&buf);
/// assert!(report.is_complete());
/// assert_eq!(report.records.len(), 1);
/// assert_eq!(report.records[0].payload, [1, 2, 3]);
/// ```
pub struct FrxScanner;

impl FrxScanner {
    /// Scan `buffer` with the default codec-backed format sniffer.
    #[must_use]
    pub fn scan(buffer: &[u8]) -> ScanReport {
        Self::scan_with_sniffer(buffer, &CodecSniffer)
    }

    /// Scan `buffer`, labelling image records via `sniffer`.
    ///
    /// A sniffer that returns `None` degrades the record's label to
    /// `"unknown"`; it never suppresses the record or stops the scan.
    #[must_use]
    pub fn scan_with_sniffer(buffer: &[u8], sniffer: &dyn ImageSniffer) -> ScanReport {
        let mut offset = 0;
        let mut records = Vec::new();

        while offset < buffer.len() {
            // Classification key lives 4 bytes into the record. Running
            // past the end here means a truncated or misaligned tail.
            let key = match read_u32_le(buffer, offset + 4) {
                Ok(key) => key,
                Err(err) => return Self::aborted(records, err.into()),
            };

            if key == IMAGE_KEY {
                match image_record::decode(buffer, offset, sniffer) {
                    Ok((record, consumed)) => {
                        records.push(record);
                        offset += consumed;
                    }
                    Err(err) => return Self::aborted(records, err),
                }
            } else {
                match list_record::decode(buffer, offset) {
                    Ok(ListOutcome::Empty { consumed }) => offset += consumed,
                    Ok(ListOutcome::Item { record, consumed }) => {
                        records.push(record);
                        offset += consumed;
                    }
                    Err(err) => return Self::aborted(records, err),
                }
            }
        }

        ScanReport {
            records,
            outcome: ScanOutcome::Complete,
        }
    }

    fn aborted(records: Vec<ResourceRecord>, err: ScanError) -> ScanReport {
        ScanReport {
            records,
            outcome: ScanOutcome::Aborted(err),
        }
    }
}
