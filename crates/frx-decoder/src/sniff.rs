//! Default codec-backed implementation of [`ImageSniffer`].

use frx_types::ImageSniffer;

/// Sniffs image formats with the `image` crate's magic-byte detection.
///
/// The label is the format's primary file extension (`"png"`, `"bmp"`,
/// `"jpg"`, ...). No pixel data is decoded; only the leading magic bytes
/// are inspected, so arbitrary garbage is safe input.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodecSniffer;

impl ImageSniffer for CodecSniffer {
    fn sniff(&self, bytes: &[u8]) -> Option<&'static str> {
        let format = image::guess_format(bytes).ok()?;
        format.extensions_str().first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_png_magic() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(CodecSniffer.sniff(&png), Some("png"));
    }

    #[test]
    fn recognizes_bmp_magic() {
        assert_eq!(CodecSniffer.sniff(b"BM\x00\x00\x00\x00"), Some("bmp"));
    }

    #[test]
    fn garbage_sniffs_to_none() {
        assert_eq!(CodecSniffer.sniff(&[0x00, 0x01, 0x02]), None);
        assert_eq!(CodecSniffer.sniff(&[]), None);
    }
}
