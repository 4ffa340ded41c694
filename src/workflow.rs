//! One update run: collect, load, merge, save.
//!
//! Exit-free; `main` turns the result into output and a status code.
use crate::config::Settings;
use crate::entry::{collect_week, LineSource};
use crate::error::UpdateError;
use crate::store::{self, UpsertOutcome};
use chrono::NaiveDate;
use std::path::PathBuf;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub date: String,
    pub total: u128,
    pub outcome: UpsertOutcome,
    pub records: usize,
    pub data_path: PathBuf,
}

/// Prompt for a week and upsert it into the configured data file.
///
/// Input is collected before the file is read, so a malformed file is only
/// reported after the prompts; it is never rewritten in that case.
pub fn run_update(
    settings: &Settings,
    source: &mut impl LineSource,
    today: NaiveDate,
) -> Result<UpdateSummary, UpdateError> {
    let week = collect_week(source, &settings.countries, today)?;
    let mut records = store::load_records(&settings.data_path)?;
    let outcome = store::upsert_week(&mut records, &week);
    store::write_records(&settings.data_path, &records)?;
    Ok(UpdateSummary {
        total: week.total(),
        date: week.date,
        outcome,
        records: records.len(),
        data_path: settings.data_path.clone(),
    })
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
