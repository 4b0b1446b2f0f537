//! Decoder for fixed-length, explicitly sized image records.
//!
//! Wire layout, relative to the record start:
//!
//! ```text
//! ┌────────────┬──────────────┬──────────────┬────────────────┐
//! │ lead-in    │ key          │ size         │ payload        │
//! │ 4 bytes    │ u32 LE = 6C  │ u32 LE       │ size bytes     │
//! │ (ignored)  │ 74 00 00     │              │                │
//! └────────────┴──────────────┴──────────────┴────────────────┘
//!  offset       offset+4       offset+8       offset+12
//! ```
//!
//! The caller has already matched the key; this module reads the size,
//! slices the payload, and labels it via the injected sniffer.

use frx_types::{ImageSniffer, ResourceKind, ResourceRecord, UNKNOWN_FORMAT};
use frx_wire::WireError;
use frx_wire::primitive::read_u32_le;

use crate::error::ScanError;

/// Byte count of lead-in + key + size preceding the payload.
const HEADER_LEN: usize = 12;

/// Decode the image record at `offset`.
///
/// Returns the record and the total bytes consumed (`size + 12`). The
/// emitted payload length always equals the size field read from the
/// container.
///
/// # Errors
///
/// [`ScanError::Bounds`] if the size field or the payload slice extends
/// past the end of the buffer. The size field is untrusted; the payload
/// end is computed with checked arithmetic.
pub fn decode(
    buf: &[u8],
    offset: usize,
    sniffer: &dyn ImageSniffer,
) -> Result<(ResourceRecord, usize), ScanError> {
    let size = read_u32_le(buf, offset + 8)? as usize;

    let start = offset + HEADER_LEN;
    let end = start
        .checked_add(size)
        .ok_or(WireError::UnexpectedEof { offset: start })?;
    let payload = buf
        .get(start..end)
        .ok_or(WireError::UnexpectedEof { offset: start })?
        .to_vec();

    let label = sniffer
        .sniff(&payload)
        .unwrap_or(UNKNOWN_FORMAT)
        .to_string();

    let record = ResourceRecord {
        kind: ResourceKind::Image,
        label,
        payload,
    };
    Ok((record, size + HEADER_LEN))
}
