/// The two record kinds an `.frx` container holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A bitmap/image resource with an explicit 32-bit size field.
    Image,
    /// ItemData/ListData of a list control (combobox, listbox). The
    /// payload is NUL-separated text; its length is heuristic.
    ListItem,
}

impl ResourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::ListItem => "ListItem",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted resource record.
///
/// Immutable once constructed. The scanner emits records in the order
/// they were encountered; `payload` is the raw extracted bytes, never
/// re-encoded or validated beyond the extraction logic itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRecord {
    pub kind: ResourceKind,

    /// A short descriptive string: the sniffed image format name for
    /// `Image` records (`"png"`, `"bmp"`, or `"unknown"` when sniffing
    /// fails), the fixed tag `"ListItem"` otherwise.
    pub label: String,

    /// The raw extracted bytes.
    pub payload: Vec<u8>,
}

impl ResourceRecord {
    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
