use frx_wire::WireError;

/// Fatal scan errors.
///
/// Both variants abort the scan at the record where they occur; the
/// records decoded before that point are handed back alongside the error
/// (see [`crate::ScanReport`]). Sniff failures are deliberately absent —
/// they degrade a record's label and never stop the scan.
///
/// ```text
///   ScanError
///   ├── Bounds(WireError)    ← a field read or payload slice passed the
///   │                          end of the buffer
///   └── UnknownRecordType    ← non-empty list header with the wrong key
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A decoded length or key field would read past the end of the
    /// buffer.
    ///
    /// Continuing after this would mean decoding at corrupted offsets,
    /// so the scan stops rather than resynchronizing.
    #[error(transparent)]
    Bounds(#[from] WireError),

    /// A non-empty variable-length record header did not carry the
    /// expected list key.
    ///
    /// This is the stop-on-first-unrecognized-structure policy: the key
    /// is the only classification signal, and a wrong key means every
    /// subsequent offset computation would be guesswork.
    #[error("unknown record type: key {key:#010X} at offset {offset}")]
    UnknownRecordType { offset: usize, key: u32 },
}
