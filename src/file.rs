use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::mode::FileMode;
use crate::scalar::ByteOrder;

/// A file opened in binary mode, with methods for reading and writing fixed-width scalars and
/// text lines.
///
/// The file is either open or closed. It is closed by `close`, by the end of a `scoped` block,
/// or by being dropped. Every I/O method on a closed file fails with `Error::Closed`.
///
/// Reads are unbuffered: a read of `n` values of width `w` issues a read of exactly `n * w`
/// bytes at the current position, and never reads ahead.
pub struct BinaryFile {
    file: Option<File>,
    pub(crate) order: ByteOrder,
    path: PathBuf,
    mode: FileMode,
}

impl BinaryFile {
    /// Opens `path` with a mode string such as `"r"`, `"wb"` or `"a"`. See [`FileMode::parse`].
    pub fn open<P: AsRef<Path>>(path: P, mode: &str) -> Result<Self> {
        Self::open_with_mode(path, FileMode::parse(mode)?)
    }

    /// Opens `path` with an already-parsed mode.
    pub fn open_with_mode<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<Self> {
        let path = path.as_ref();
        let file = mode.to_open_options().open(path)?;
        debug!(path = %path.display(), %mode, "opened binary file");
        Ok(Self {
            file: Some(file),
            order: ByteOrder::default(),
            path: path.to_path_buf(),
            mode,
        })
    }

    /// Opens `path`, passes the file to `f`, then closes the file.
    ///
    /// The file is closed on every exit path: when `f` returns `Ok`, when it returns `Err`, and
    /// when it panics. An error returned by `f` is logged and then returned unchanged. If `f`
    /// succeeds but closing fails, the close error is returned.
    pub fn scoped<P, F, R>(path: P, mode: &str, f: F) -> Result<R>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BinaryFile) -> Result<R>,
    {
        let mut file = Self::open(path, mode)?;
        let result = f(&mut file);
        let closed = file.close();
        match result {
            Ok(value) => closed.map(|()| value),
            Err(err) => {
                warn!(path = %file.path.display(), error = %err, "binary file scope ended with an error");
                Err(err)
            }
        }
    }

    /// Closes the file. Closing a file that is already closed does nothing.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            debug!(path = %self.path.display(), "closing binary file");
            file.flush()?;
        }
        Ok(())
    }

    /// Returns `true` once the file has been closed.
    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    /// The path the file was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mode the file was opened with.
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// The byte order used for multi-byte scalars.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Sets the byte order used for multi-byte scalars. Takes effect for the next read or write.
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Moves the stream position.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.handle()?.seek(pos)?)
    }

    /// The current stream position.
    pub fn tell(&mut self) -> Result<u64> {
        Ok(self.handle()?.stream_position()?)
    }

    /// Flushes pending writes.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.handle()?.flush()?)
    }

    /// Accesses the underlying file, or `None` if it has been closed.
    pub fn inner_mut(&mut self) -> Option<&mut File> {
        self.file.as_mut()
    }

    pub(crate) fn handle(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(Error::Closed)
    }
}

impl Drop for BinaryFile {
    fn drop(&mut self) {
        if self.file.is_some() {
            trace!(path = %self.path.display(), "dropping open binary file");
        }
    }
}

impl core::fmt::Debug for BinaryFile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BinaryFile")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("order", &self.order)
            .field("closed", &self.is_closed())
            .finish()
    }
}
