use super::{WeekEntry, WeekRecord};

/// What happened to the data set when a week was merged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Replaced,
    Appended,
}

/// Merge `entry` into `records` by date, then sort ascending by date string.
///
/// Only the first record with a matching date is updated, and only its
/// `countries` field; any other fields on that record are left alone.
pub fn upsert_week(records: &mut Vec<WeekRecord>, entry: &WeekEntry) -> UpsertOutcome {
    let outcome = match records
        .iter_mut()
        .find(|record| record.date() == Some(entry.date.as_str()))
    {
        Some(existing) => {
            existing.set_countries(&entry.counts);
            UpsertOutcome::Replaced
        }
        None => {
            records.push(WeekRecord::from_entry(entry));
            UpsertOutcome::Appended
        }
    };
    // Stable, so records sharing a date keep their relative order.
    records.sort_by(|a, b| a.date_key().cmp(b.date_key()));
    tracing::info!(
        date = %entry.date,
        outcome = ?outcome,
        records = records.len(),
        "week merged"
    );
    outcome
}

#[cfg(test)]
#[path = "upsert_tests.rs"]
mod tests;
