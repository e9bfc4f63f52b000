//! Storage utilities for Vela
//!
//! This crate provides the small slice of the storage layer the command
//! executor writes through:
//! - FileSystem / FileHandle: open a path for writing, sync it to disk
//! - LocalFileSystem: the local-disk implementation
//! - FileWriter: fixed-buffer writer with an explicit durable flush

#![warn(missing_docs)]

pub mod error;
pub mod file_system;
pub mod file_writer;

pub use error::{StorageError, StorageResult};
pub use file_system::{FileHandle, FileSystem, LocalFileSystem};
pub use file_writer::FileWriter;
