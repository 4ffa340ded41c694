use super::WeekRecord;
use crate::error::UpdateError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the data file, or bootstrap an empty data set on first run.
///
/// A missing file is not an error: its parent directory is created and an
/// empty sequence returned. Elements are returned as-is; the only checks are
/// that the file parses and that it holds an array. A file failing either is
/// left untouched.
pub fn load_records(path: &Path) -> Result<Vec<WeekRecord>, UpdateError> {
    if !path.exists() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| UpdateError::io("create", parent, err))?;
        }
        tracing::info!(path = %path.display(), "data file missing; starting empty");
        return Ok(Vec::new());
    }

    let bytes = fs::read(path).map_err(|err| UpdateError::io("read", path, err))?;
    let document: Value =
        serde_json::from_slice(&bytes).map_err(|source| UpdateError::MalformedStore {
            path: path.to_path_buf(),
            source,
        })?;
    let Value::Array(items) = document else {
        return Err(UpdateError::NotAnArray {
            path: path.to_path_buf(),
        });
    };
    let records: Vec<WeekRecord> = items.into_iter().map(WeekRecord).collect();
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "loaded data file"
    );
    Ok(records)
}
