#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A fixed-width read or payload slice starting at `offset` would
    /// extend past the end of the buffer.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
}
