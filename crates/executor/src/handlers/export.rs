//! `EXPORT PROFILE` handler.

use std::path::Path;

use tracing::info;
use vela_engine::Session;
use vela_storage::{FileSystem, FileWriter};

use crate::{Error, Result};

/// Buffer size of the writer used for exports.
pub const EXPORT_BUFFER_SIZE: usize = 128;

/// Write profile record `file_no` of `session` to `file_name` as JSON.
///
/// The record is looked up before anything is opened, so a missing record
/// never creates or truncates the target file. On success the bytes have been
/// flushed and synced.
pub fn export_profile(
    session: &Session,
    fs: &dyn FileSystem,
    file_no: u64,
    file_name: &str,
) -> Result<()> {
    let record = session
        .get_profile_record(file_no)
        .ok_or_else(|| Error::DataNotExist {
            reason: format!("The record does not exist: {}", file_no),
        })?;
    let json = record.to_json()?;

    let mut writer = FileWriter::new(fs, Path::new(file_name), EXPORT_BUFFER_SIZE)?;
    writer.write(json.as_bytes())?;
    writer.flush()?;

    info!(
        target: "vela::export",
        session = %session.id(),
        sequence = file_no,
        path = file_name,
        bytes = writer.total_written(),
        "Profile exported"
    );
    Ok(())
}
