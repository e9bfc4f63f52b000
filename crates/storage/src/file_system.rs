//! File-system abstraction
//!
//! Callers open files through a [`FileSystem`] so that the local disk can be
//! swapped for another backend (or a failing one in tests) without touching
//! the code that writes.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{StorageError, StorageResult};

/// An open, writable file.
///
/// `sync` must not return until the bytes written so far are durable on the
/// storage medium.
pub trait FileHandle: Write + Send {
    /// Make everything written so far durable.
    fn sync(&mut self) -> io::Result<()>;
}

/// Opens files for writing.
pub trait FileSystem: Send + Sync {
    /// Create `path` (truncating an existing file) and open it for writing.
    fn open_for_write(&self, path: &Path) -> StorageResult<Box<dyn FileHandle>>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a local file system handle.
    pub fn new() -> Self {
        Self
    }
}

impl FileHandle for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

impl FileSystem for LocalFileSystem {
    fn open_for_write(&self, path: &Path) -> StorageResult<Box<dyn FileHandle>> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|source| StorageError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Box::new(file))
    }
}
