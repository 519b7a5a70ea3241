//! Reads and writes fixed-width binary scalars and simple text lines from files.
//!
//! [`BinaryFile`] wraps a file opened in binary mode. Signed integers of 1, 2, 4 and 8 bytes and
//! IEEE-754 floats of 4 and 8 bytes can be read and written one at a time or as packed runs.
//! Reads take an element count and return a bare value for a count of 1, or a sequence
//! otherwise (see [`Values`]); writes take a scalar or anything array-like and write as many
//! values as it holds.
//!
//! Multi-byte values use the host's native byte order unless another [`ByteOrder`] is selected.
//! Files written in native order can only be read back correctly on hosts with the same
//! endianness.
//!
//! ```no_run
//! use native_binary_io::{BinaryFile, Encoding};
//!
//! # fn main() -> native_binary_io::Result<()> {
//! let (header, count, samples) = BinaryFile::scoped("samples.bin", "rb", |f| {
//!     let header = f.readline(Encoding::Utf8)?;
//!     let count = f.read_int4(1)?.as_slice()[0];
//!     let samples = f.read_real4(count as usize)?.into_vec();
//!     Ok((header, count, samples))
//! })?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod encoding;
mod error;
mod file;
mod mode;
mod reader;
mod scalar;
mod writer;


pub use encoding::Encoding;
pub use error::{Error, Result};
pub use file::BinaryFile;
pub use mode::{FileMode, ParseModeError};
pub use scalar::{ByteOrder, Scalar, ScalarSource, Values};
