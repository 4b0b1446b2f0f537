#![warn(clippy::pedantic)]

//! Shared fixtures for the frx integration tests and benchmarks.
//!
//! [`ContainerBuilder`] assembles synthetic `.frx` containers byte by
//! byte so tests can state exactly which record layouts they exercise;
//! [`render_report`] flattens a scan result into a stable one-line-per-
//! record text form for snapshot comparison.

use frx_decoder::{ScanOutcome, ScanReport};
use frx_types::{ImageSniffer, ResourceKind};
use frx_wire::keys::{IMAGE_KEY, LIST_KEY};

/// Builds synthetic `.frx` container buffers.
///
/// ```rust
/// use frx_tests::ContainerBuilder;
///
/// let buf = ContainerBuilder::new()
///     .list(b"one\0two")
///     .image(b"\x89PNG")
///     .build();
/// ```
#[derive(Default)]
pub struct ContainerBuilder {
    buf: Vec<u8>,
}

impl ContainerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image record: 4-byte lead-in (ignored by the scanner),
    /// key, explicit u32 size, payload.
    ///
    /// # Panics
    ///
    /// Panics if `payload` exceeds `u32::MAX` bytes.
    #[must_use]
    pub fn image(mut self, payload: &[u8]) -> Self {
        self.buf.extend_from_slice(&[0xEE; 4]);
        self.buf.extend_from_slice(&IMAGE_KEY.to_le_bytes());
        self.buf
            .extend_from_slice(&u32::try_from(payload.len()).expect("payload fits u32").to_le_bytes());
        self.buf.extend_from_slice(payload);
        self
    }

    /// Append a list record header plus payload bytes. The u16 length
    /// prefix only needs to be non-zero; the container never stores a
    /// usable byte count, so the scanner finds the end by marker search
    /// in whatever bytes follow.
    #[must_use]
    pub fn list(mut self, payload: &[u8]) -> Self {
        self.buf.extend_from_slice(&1u16.to_le_bytes());
        self.buf.extend_from_slice(&LIST_KEY.to_le_bytes());
        self.buf.extend_from_slice(payload);
        self
    }

    /// Append a 2-byte empty/padding slot.
    #[must_use]
    pub fn padding(mut self) -> Self {
        self.buf.extend_from_slice(&[0x00, 0x00]);
        self
    }

    /// Append arbitrary bytes verbatim.
    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

/// A sniffer that always answers the same thing, for deterministic
/// labels independent of any image codec.
pub struct FixedSniffer(pub Option<&'static str>);

impl ImageSniffer for FixedSniffer {
    fn sniff(&self, _bytes: &[u8]) -> Option<&'static str> {
        self.0
    }
}

/// Render a scan report as stable snapshot text: one line per record
/// (kind, image label, payload size, payload hex) plus an outcome line.
#[must_use]
pub fn render_report(report: &ScanReport) -> String {
    let mut lines = Vec::new();
    for (idx, record) in report.records.iter().enumerate() {
        let line = match record.kind {
            ResourceKind::Image => format!(
                "record {idx}: Image [{}] ({} bytes) {}",
                record.label,
                record.len(),
                hex::encode(&record.payload)
            ),
            ResourceKind::ListItem => format!(
                "record {idx}: ListItem ({} bytes) {}",
                record.len(),
                hex::encode(&record.payload)
            ),
        };
        lines.push(line);
    }
    match &report.outcome {
        ScanOutcome::Complete => lines.push("outcome: complete".to_string()),
        ScanOutcome::Aborted(err) => lines.push(format!("outcome: aborted ({err})")),
    }
    lines.join("\n")
}
