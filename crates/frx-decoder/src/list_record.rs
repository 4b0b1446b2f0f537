//! Decoder for variable-length list-control records.
//!
//! Wire layout, relative to the record start:
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────────────────────┐
//! │ length       │ key          │ payload                       │
//! │ u16 LE       │ u32 LE = 03  │ NUL-separated item text,      │
//! │ (0 = empty   │ 00 01 00     │ end located by marker search  │
//! │  padding)    │              │                               │
//! └──────────────┴──────────────┴──────────────────────────────┘
//!  offset         offset+2       offset+6
//! ```
//!
//! The u16 length prefix is only tested against zero — the container
//! does not store a usable byte count, so the payload end is found by
//! the priority-ordered marker search in [`frx_wire::marker`].

use frx_types::{ResourceKind, ResourceRecord};
use frx_wire::keys::LIST_KEY;
use frx_wire::marker::{BOUNDARY_MARKERS, find_pattern};
use frx_wire::primitive::{read_u16_le, read_u32_le};

use crate::error::ScanError;

/// Fixed label carried by every emitted list record.
const LIST_LABEL: &str = "ListItem";

/// Outcome of decoding one list-record slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListOutcome {
    /// Nothing to emit: an empty padding slot (2 bytes), or a record
    /// whose end marker was never found (consumes to the buffer end).
    Empty { consumed: usize },

    /// A record was extracted.
    Item {
        record: ResourceRecord,
        consumed: usize,
    },
}

/// Decode the list-record slot at `offset`.
///
/// `Empty`/`Item` both report `consumed > 0`, so the scan loop always
/// makes forward progress.
///
/// # Errors
///
/// - [`ScanError::Bounds`] if the length or key field extends past the
///   end of the buffer.
/// - [`ScanError::UnknownRecordType`] if the slot is non-empty but the
///   key is not [`LIST_KEY`]. Fatal for the whole scan.
pub fn decode(buf: &[u8], offset: usize) -> Result<ListOutcome, ScanError> {
    let list_len = read_u16_le(buf, offset)?;
    if list_len == 0 {
        return Ok(ListOutcome::Empty { consumed: 2 });
    }

    let list_key = read_u32_le(buf, offset + 2)?;
    if list_key != LIST_KEY {
        return Err(ScanError::UnknownRecordType {
            offset,
            key: list_key,
        });
    }

    let payload_start = offset + 6;

    // Strict priority: the first marker that matches anywhere in the
    // remainder wins, even if a lower-priority one occurs earlier.
    let mut end_index = None;
    for marker in &BOUNDARY_MARKERS {
        if let Some(found) = find_pattern(buf, payload_start, marker.pattern) {
            // found >= payload_start >= 6 and |shift| <= 4, so this
            // cannot go below zero; it can land before payload_start.
            end_index = Some(found.wrapping_add_signed(marker.shift));
            break;
        }
    }

    match end_index {
        // A marker too close to the record start yields a negative
        // computed length; the origin format cannot mean that, so it is
        // treated exactly like "no terminator found".
        Some(end) if end >= payload_start => {
            let record = ResourceRecord {
                kind: ResourceKind::ListItem,
                label: LIST_LABEL.to_string(),
                payload: buf[payload_start..end].to_vec(),
            };
            Ok(ListOutcome::Item {
                record,
                consumed: end - offset,
            })
        }
        _ => Ok(ListOutcome::Empty {
            consumed: buf.len() - offset,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `[len u16][key][payload...]` at offset 0.
    fn list_header(payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&[0x03, 0x00, 0x01, 0x00]);
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn zero_length_is_two_byte_padding() {
        let buf = [0x00, 0x00, 0xFF, 0xFF];
        assert_eq!(
            decode(&buf, 0).unwrap(),
            ListOutcome::Empty { consumed: 2 }
        );
    }

    #[test]
    fn wrong_key_is_fatal() {
        let buf = [0x02, 0x00, 0xDE, 0xAD, 0xBE, 0xEF];
        let result = decode(&buf, 0);
        assert!(matches!(
            result,
            Err(ScanError::UnknownRecordType {
                offset: 0,
                key: 0xEFBE_ADDE,
            })
        ));
    }

    #[test]
    fn padding_marker_terminates_payload() {
        // Payload "AB", then a 00 00 padding marker (shift 0).
        let mut buf = list_header(b"AB");
        buf.extend_from_slice(&[0x00, 0x00]);
        match decode(&buf, 0).unwrap() {
            ListOutcome::Item { record, consumed } => {
                assert_eq!(record.kind, ResourceKind::ListItem);
                assert_eq!(record.label, "ListItem");
                assert_eq!(record.payload, b"AB");
                assert_eq!(consumed, 8);
            }
            other => panic!("expected Item, got {other:?}"),
        }
    }

    #[test]
    fn next_list_key_terminates_with_shift() {
        // Payload "xyz", then the next record's [len][key]. Marker 1
        // matches at the key and shifts back 2 onto the length prefix.
        let mut buf = list_header(b"xyz");
        buf.extend_from_slice(&2u16.to_le_bytes());
        buf.extend_from_slice(&[0x03, 0x00, 0x01, 0x00]);
        match decode(&buf, 0).unwrap() {
            ListOutcome::Item { record, consumed } => {
                assert_eq!(record.payload, b"xyz");
                // End lands on the next record's length prefix.
                assert_eq!(consumed, 9);
            }
            other => panic!("expected Item, got {other:?}"),
        }
    }

    #[test]
    fn next_image_key_terminates_with_shift() {
        // Payload "hi", then an image record whose 4-byte lead-in is
        // non-zero (so the padding marker cannot fire first) and whose
        // key matches marker 2, shift -4 back onto the lead-in.
        let mut buf = list_header(b"hi");
        buf.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
        buf.extend_from_slice(&[0x6C, 0x74, 0x00, 0x00]);
        match decode(&buf, 0).unwrap() {
            ListOutcome::Item { record, consumed } => {
                assert_eq!(record.payload, b"hi");
                assert_eq!(consumed, 8);
            }
            other => panic!("expected Item, got {other:?}"),
        }
    }

    #[test]
    fn far_priority_one_beats_near_priority_three() {
        // A 00 00 pair sits right inside the payload, but the list-key
        // marker occurs later. Priority 1 must win: the payload runs all
        // the way to the far marker and swallows the 00 00.
        let mut buf = list_header(&[0x41, 0x00, 0x00, 0x42]);
        buf.extend_from_slice(&3u16.to_le_bytes());
        buf.extend_from_slice(&[0x03, 0x00, 0x01, 0x00]);
        match decode(&buf, 0).unwrap() {
            ListOutcome::Item { record, consumed } => {
                assert_eq!(record.payload, [0x41, 0x00, 0x00, 0x42]);
                assert_eq!(consumed, 10);
            }
            other => panic!("expected Item, got {other:?}"),
        }
    }

    #[test]
    fn no_marker_consumes_to_end_without_emitting() {
        let buf = list_header(&[0x41, 0x42, 0x43]);
        assert_eq!(
            decode(&buf, 0).unwrap(),
            ListOutcome::Empty { consumed: 9 }
        );
    }

    #[test]
    fn negative_computed_length_is_treated_as_no_match() {
        // Marker 1 matches at payload_start exactly: end = start - 2,
        // a negative length. Must behave like "no terminator".
        let mut buf = list_header(&[]);
        buf.extend_from_slice(&[0x03, 0x00, 0x01, 0x00]);
        assert_eq!(
            decode(&buf, 0).unwrap(),
            ListOutcome::Empty { consumed: 10 }
        );
    }

    #[test]
    fn zero_length_payload_is_emitted() {
        // Padding marker immediately at payload_start: end == start,
        // length 0. An empty record is still a record.
        let mut buf = list_header(&[]);
        buf.extend_from_slice(&[0x00, 0x00]);
        match decode(&buf, 0).unwrap() {
            ListOutcome::Item { record, consumed } => {
                assert!(record.payload.is_empty());
                assert_eq!(consumed, 6);
            }
            other => panic!("expected Item, got {other:?}"),
        }
    }

    #[test]
    fn truncated_key_field_is_bounds_error() {
        let buf = [0x02, 0x00, 0x03, 0x00];
        assert!(matches!(decode(&buf, 0), Err(ScanError::Bounds(_))));
    }

    #[test]
    fn decodes_at_nonzero_offset() {
        let mut buf = vec![0x77; 5];
        buf.extend_from_slice(&list_header(b"Q"));
        buf.extend_from_slice(&[0x00, 0x00]);
        match decode(&buf, 5).unwrap() {
            ListOutcome::Item { record, consumed } => {
                assert_eq!(record.payload, b"Q");
                assert_eq!(consumed, 7);
            }
            other => panic!("expected Item, got {other:?}"),
        }
    }
}
