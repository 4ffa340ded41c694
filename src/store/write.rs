use super::WeekRecord;
use crate::error::UpdateError;
use std::fs;
use std::path::Path;

/// Overwrite the data file with the full data set.
///
/// Output is 2-space pretty JSON with a trailing newline. Not atomic: a crash
/// mid-write can leave a truncated file behind.
pub fn write_records(path: &Path, records: &[WeekRecord]) -> Result<(), UpdateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| UpdateError::io("create", parent, err))?;
    }
    let mut text = serde_json::to_string_pretty(records).map_err(UpdateError::Serialize)?;
    text.push('\n');
    fs::write(path, text.as_bytes()).map_err(|err| UpdateError::io("write", path, err))?;
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        bytes = text.len(),
        "wrote data file"
    );
    Ok(())
}
