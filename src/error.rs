use crate::encoding::Encoding;
use crate::mode::ParseModeError;

/// Result type used by every fallible `BinaryFile` operation.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for `BinaryFile`.
///
/// Reads and writes share this type. In particular, a typed read that runs out of input always
/// reports `ShortRead`, regardless of the width or the number of elements requested.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The platform failed to open, read, write, or seek the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A typed read received fewer bytes than its values require. This usually means the end of
    /// the file was reached in the middle of a value.
    ///
    /// The bytes that were available have been consumed.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Number of bytes the requested values occupy.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// A byte does not code for a character in the requested encoding.
    #[error("byte 0x{byte:02x} is not a valid {encoding} character")]
    Decode {
        /// The encoding used for decoding.
        encoding: Encoding,
        /// The offending byte.
        byte: u8,
    },

    /// A character cannot be represented in the requested encoding.
    #[error("character {ch:?} cannot be encoded as {encoding}")]
    Encode {
        /// The encoding used for encoding.
        encoding: Encoding,
        /// The offending character.
        ch: char,
    },

    /// The mode string was rejected.
    #[error(transparent)]
    InvalidMode(#[from] ParseModeError),

    /// A typed read was asked for zero values.
    #[error("element count must be at least 1")]
    InvalidCount,

    /// The file has already been closed.
    #[error("I/O operation on closed file")]
    Closed,
}
