use thiserror::Error;

/// Errors produced while decoding bencode.
///
/// Every error aborts the current decode. Nested values propagate the first
/// failure unchanged, so the variant seen by the caller is the one raised by
/// the innermost reader.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The byte source ran out before a value was complete.
    #[error("unexpected end of input")]
    EndOfInput,

    /// A byte other than a digit, `-` or the terminating `e` inside an integer.
    #[error("malformed number: unexpected byte {0:#04x}")]
    MalformedNumber(u8),

    /// A byte other than a digit or `:` inside a byte-string length prefix.
    #[error("malformed length: unexpected byte {0:#04x}")]
    MalformedLength(u8),

    /// The length prefix does not fit in `usize`.
    #[error("byte string length too large: {0}")]
    LengthOverflow(String),

    /// The first byte of a value is not `i`, `l`, `d`, `e` or a digit.
    #[error("unknown tag: {0:#04x}")]
    UnknownTag(u8),

    /// A dictionary key decoded to something other than a byte string.
    #[error("dictionary key is not a byte string")]
    InvalidKeyType,

    /// An `e` was read where a value was expected outside any container.
    #[error("end marker outside of a container")]
    UnexpectedEndMarker,

    /// Container nesting went past the configured limit.
    #[error("nesting deeper than {0} levels")]
    DepthExceeded(usize),

    /// Bytes remained after the top-level value.
    #[error("trailing data after value")]
    TrailingData,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
