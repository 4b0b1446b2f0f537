//! Boundary markers for records whose length is not stored on the wire.
//!
//! List-control records carry no explicit payload length; their end is
//! located by scanning forward for one of three fixed byte sequences.
//! Each marker pairs a pattern with a signed shift applied to the match
//! position to back off onto the actual record boundary:
//!
//! ```text
//! ┌──────────┬──────────────┬───────┬─────────────────────────────────┐
//! │ priority │ pattern      │ shift │ what the pattern is             │
//! ├──────────┼──────────────┼───────┼─────────────────────────────────┤
//! │ 1        │ 03 00 01 00  │ −2    │ next list record's key field,   │
//! │          │              │       │ backed off to its u16 length    │
//! │ 2        │ 6C 74 00 00  │ −4    │ next image record's key field,  │
//! │          │              │       │ backed off to its 4-byte lead-in│
//! │ 3        │ 00 00        │  0    │ trailing empty/padding slot     │
//! └──────────┴──────────────┴───────┴─────────────────────────────────┘
//! ```
//!
//! Priority is strict: a higher-priority marker wins wherever it occurs,
//! even if a lower-priority one occurs closer to the record start. The
//! search is therefore a sequence of independent full-forward scans, not
//! a single nearest-match scan over all patterns — the two disagree on
//! some inputs and only the former matches the container format.

/// One boundary marker: a byte pattern plus a shift onto the boundary.
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub pattern: &'static [u8],
    pub shift: isize,
}

/// The three boundary markers, in strict priority order.
pub const BOUNDARY_MARKERS: [Marker; 3] = [
    Marker {
        pattern: &[0x03, 0x00, 0x01, 0x00],
        shift: -2,
    },
    Marker {
        pattern: &[0x6C, 0x74, 0x00, 0x00],
        shift: -4,
    },
    Marker {
        pattern: &[0x00, 0x00],
        shift: 0,
    },
];

/// Find the first (lowest-index) occurrence of `pattern` in `buf` at or
/// after `from`.
///
/// Returns the absolute index of the match start, or `None` when the
/// pattern does not occur. A pattern that would only match by running
/// past the end of the buffer does not match at all.
#[must_use]
pub fn find_pattern(buf: &[u8], from: usize, pattern: &[u8]) -> Option<usize> {
    buf.get(from..)?
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|i| from + i)
}
