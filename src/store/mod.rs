//! Week records and their JSON data file.
//!
//! The file is loaded whole, merged in memory, and rewritten whole. Records
//! stay raw JSON so anything hand-edited into the file survives a save with
//! its key order intact; only `date` and `countries` are ever looked at.
mod load;
mod upsert;
mod write;

pub use load::load_records;
pub use upsert::{upsert_week, UpsertOutcome};
pub use write::write_records;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered country name to count mapping, in configured order.
pub type CountryCounts = Vec<(String, u64)>;

const DATE_KEY: &str = "date";
const COUNTRIES_KEY: &str = "countries";

/// One element of the data file's top-level array, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekRecord(Value);

impl WeekRecord {
    pub fn from_entry(entry: &WeekEntry) -> Self {
        let mut object = Map::new();
        object.insert(DATE_KEY.to_string(), Value::from(entry.date.clone()));
        object.insert(
            COUNTRIES_KEY.to_string(),
            Value::Object(countries_object(&entry.counts)),
        );
        Self(Value::Object(object))
    }

    /// The record's `date`, when it is a string.
    pub fn date(&self) -> Option<&str> {
        self.0.get(DATE_KEY).and_then(Value::as_str)
    }

    /// Sort key; records without a string date sort first.
    pub fn date_key(&self) -> &str {
        self.date().unwrap_or("")
    }

    /// Overwrite `countries`, keeping its position when the key already exists.
    /// Records that are not JSON objects are left alone.
    pub fn set_countries(&mut self, counts: &[(String, u64)]) {
        if let Value::Object(object) = &mut self.0 {
            object.insert(
                COUNTRIES_KEY.to_string(),
                Value::Object(countries_object(counts)),
            );
        }
    }
}

/// A newly collected week, before it is merged into the data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekEntry {
    pub date: String,
    pub counts: CountryCounts,
}

impl WeekEntry {
    /// Sum of all counts; widened so any mix of accepted counts fits.
    pub fn total(&self) -> u128 {
        self.counts.iter().map(|(_, count)| u128::from(*count)).sum()
    }
}

fn countries_object(counts: &[(String, u64)]) -> Map<String, Value> {
    counts
        .iter()
        .map(|(name, count)| (name.clone(), Value::from(*count)))
        .collect()
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
