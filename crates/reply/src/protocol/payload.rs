/// Represents the size information of an HTTP payload.
///
/// This enum is used by a [`ResponseSink`](crate::protocol::ResponseSink) to
/// decide how the body will be transferred:
/// - Known length: emit a `Content-Length` header
/// - Chunked: use chunked transfer encoding (length not pre-computed)
/// - Empty: no payload at all
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PayloadSize {
    /// Payload with known length in bytes
    Length(u64),
    /// Payload using chunked transfer encoding
    Chunked,
    /// Empty payload (no body)
    Empty,
}

impl PayloadSize {
    /// Returns true if the payload uses chunked transfer encoding
    #[inline]
    pub fn is_chunked(&self) -> bool {
        matches!(self, PayloadSize::Chunked)
    }

    /// Returns true if the payload is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, PayloadSize::Empty)
    }
}
