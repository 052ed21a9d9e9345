use embedded_io::ErrorKind;
use thiserror::Error;

/// Error types for `GrowVec` serialization and deserialization
///
/// Positions are byte offsets into the stream, counted from the start of the
/// call, and point at the beginning of the field that failed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CodecError {
    /// The file could not be opened or created
    #[error("Cannot open file: {kind:?}")]
    Open {
        /// The kind of IO error reported by the operating system
        kind: ErrorKind,
    },
    /// The underlying reader or writer failed
    #[error("IO error at byte {position}: {kind:?}")]
    Io {
        /// The kind of IO error that occurred
        kind: ErrorKind,
        /// Byte position where the failing field starts
        position: usize,
    },
    /// The stream ended inside a count, a length or an element body
    #[error("Unexpected end of input at byte {position}")]
    UnexpectedEof {
        /// Byte position where the truncated field starts
        position: usize,
    },
    /// The bytes of an element are not valid UTF-8
    #[error("Element {index} at byte {position} is not valid UTF-8")]
    InvalidUtf8 {
        /// Index of the element being decoded
        index: usize,
        /// Byte position of the element body
        position: usize,
    },
    /// The element's `FromStr` implementation rejected its text
    #[error("Element {index} at byte {position} cannot be parsed")]
    Parse {
        /// Index of the element being decoded
        index: usize,
        /// Byte position of the element body
        position: usize,
    },
    /// A stored count or length does not fit into `usize` on this platform
    #[error("Stored value {value} does not fit into usize")]
    LengthOverflow {
        /// Value read from the stream
        value: u64,
    },
}
