//! Buffered file writer
//!
//! [`FileWriter`] buffers writes in a fixed-size in-memory buffer and hands
//! them to the underlying [`FileHandle`] whenever the buffer fills.
//! [`FileWriter::flush`] drains the buffer and syncs the file, so the bytes
//! are durable once it returns.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{StorageError, StorageResult};
use crate::file_system::{FileHandle, FileSystem};

/// Writer over a single file opened through a [`FileSystem`].
pub struct FileWriter {
    /// Target path, kept for error reporting
    path: PathBuf,

    /// Buffered handle
    writer: BufWriter<Box<dyn FileHandle>>,

    /// Bytes accepted by `write` so far
    total_written: u64,
}

impl FileWriter {
    /// Open `path` through `fs` with an internal buffer of `buffer_size` bytes.
    pub fn new(fs: &dyn FileSystem, path: impl AsRef<Path>, buffer_size: usize) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let handle = fs.open_for_write(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::with_capacity(buffer_size, handle),
            total_written: 0,
        })
    }

    /// Append `data`. Bytes may stay in the buffer until the next `flush`.
    pub fn write(&mut self, data: &[u8]) -> StorageResult<()> {
        self.writer
            .write_all(data)
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.total_written += data.len() as u64;
        Ok(())
    }

    /// Drain the buffer and sync the file to the storage medium.
    pub fn flush(&mut self) -> StorageResult<()> {
        let path = &self.path;
        self.writer
            .flush()
            .and_then(|_| self.writer.get_mut().sync())
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
        trace!(path = %path.display(), bytes = self.total_written, "file writer flushed");
        Ok(())
    }

    /// Total bytes accepted by `write`.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Capacity of the internal buffer.
    pub fn buffer_size(&self) -> usize {
        self.writer.capacity()
    }

    /// Target path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
