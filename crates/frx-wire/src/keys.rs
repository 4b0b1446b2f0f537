//! Record classification keys.
//!
//! These are the small integer constants an `.frx` container stores at
//! fixed offsets inside each record header. The scanner reads them with
//! [`crate::primitive::read_u32_le`] and dispatches on the value.

/// Key of an image record, read at `offset + 4`.
///
/// On the wire this is the byte sequence `6C 74 00 00` (ASCII "lt"
/// followed by two zero bytes, little-endian).
pub const IMAGE_KEY: u32 = 0x0000_746C;

/// Key of a list-control record (ItemData/ListData share this header),
/// read at `offset + 2` after a non-zero u16 length prefix.
///
/// On the wire: `03 00 01 00`.
pub const LIST_KEY: u32 = 0x0001_0003;
