//! Bounds-checked little-endian primitive reads.
//!
//! Every multi-byte field in an `.frx` container is little-endian. These
//! helpers never panic on a short buffer: an out-of-range read returns
//! [`WireError::UnexpectedEof`] carrying the offset the read started at,
//! so callers can surface exactly where an untrusted container ran out.

use crate::error::WireError;

/// Read a `u16` (little-endian) at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if `[offset, offset + 2)` is not fully
/// contained in `buf`.
pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16, WireError> {
    let bytes: [u8; 2] = take(buf, offset)?;
    Ok(u16::from_le_bytes(bytes))
}

/// Read a `u32` (little-endian) at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if `[offset, offset + 4)` is not fully
/// contained in `buf`.
pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32, WireError> {
    let bytes: [u8; 4] = take(buf, offset)?;
    Ok(u32::from_le_bytes(bytes))
}

/// Copy `N` bytes starting at `offset` into a fixed array.
fn take<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], WireError> {
    let end = offset
        .checked_add(N)
        .ok_or(WireError::UnexpectedEof { offset })?;
    let slice = buf
        .get(offset..end)
        .ok_or(WireError::UnexpectedEof { offset })?;
    Ok(slice.try_into().expect("length already checked"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_le_reads_in_order() {
        let buf = [0x34, 0x12, 0xFF];
        assert_eq!(read_u16_le(&buf, 0).unwrap(), 0x1234);
        assert_eq!(read_u16_le(&buf, 1).unwrap(), 0xFF12);
    }

    #[test]
    fn u32_le_reads_in_order() {
        let buf = [0x6C, 0x74, 0x00, 0x00, 0x03];
        assert_eq!(read_u32_le(&buf, 0).unwrap(), 0x0000_746C);
        assert_eq!(read_u32_le(&buf, 1).unwrap(), 0x0300_0074);
    }

    #[test]
    fn short_buffer_is_eof_not_panic() {
        let buf = [0x01, 0x02, 0x03];
        assert!(matches!(
            read_u32_le(&buf, 0),
            Err(WireError::UnexpectedEof { offset: 0 })
        ));
        assert!(matches!(
            read_u16_le(&buf, 2),
            Err(WireError::UnexpectedEof { offset: 2 })
        ));
    }

    #[test]
    fn offset_past_end_is_eof() {
        let buf = [0u8; 4];
        assert!(read_u16_le(&buf, 100).is_err());
        assert!(read_u32_le(&buf, usize::MAX).is_err());
    }

    #[test]
    fn read_at_exact_boundary() {
        let buf = [0xAA, 0xBB, 0xCC, 0xDD];
        assert_eq!(read_u32_le(&buf, 0).unwrap(), 0xDDCC_BBAA);
        assert_eq!(read_u16_le(&buf, 2).unwrap(), 0xDDCC);
    }
}
