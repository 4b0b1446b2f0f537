//! The image-format-sniffing collaborator boundary.
//!
//! Labelling an image record requires guessing its format from the raw
//! payload bytes. That capability lives behind an object-safe trait so
//! the scanner core stays free of any image codec: production code
//! injects a codec-backed sniffer, boundary-search tests inject a stub.

/// Placeholder label used when sniffing fails.
///
/// A failed sniff never suppresses the record; only the label degrades.
pub const UNKNOWN_FORMAT: &str = "unknown";

/// Best-effort mapping from arbitrary bytes to an image format name.
///
/// Implementations must be infallible in the error-handling sense:
/// bytes that are not a recognizable image yield `None`, never a panic.
pub trait ImageSniffer {
    /// Guess the format of `bytes`, e.g. `"png"` or `"bmp"`.
    fn sniff(&self, bytes: &[u8]) -> Option<&'static str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysPng;

    impl ImageSniffer for AlwaysPng {
        fn sniff(&self, _bytes: &[u8]) -> Option<&'static str> {
            Some("png")
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let sniffer: &dyn ImageSniffer = &AlwaysPng;
        assert_eq!(sniffer.sniff(b"anything"), Some("png"));
    }
}
