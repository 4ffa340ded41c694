//! Operator prompts for one week of counts.
//!
//! Dates fail fast; counts re-prompt until they parse. Every read goes
//! through `LineSource` so the end of input cancels instead of spinning.
mod parse;
mod prompt;

pub use prompt::{LineSource, Prompter};

use crate::error::UpdateError;
use crate::store::WeekEntry;
use chrono::NaiveDate;
use parse::{parse_count, parse_week_date};

const BANNER: &str = "=== Add weekly numbers ===";
const COUNTS_HEADER: &str = "Enter case numbers for each country (blank = 0):";
const COUNT_RETRY_HINT: &str = "Please enter a non-negative integer (or leave blank for 0).";

/// Prompt for a week date and one count per country, in order.
pub fn collect_week(
    source: &mut impl LineSource,
    countries: &[String],
    today: NaiveDate,
) -> Result<WeekEntry, UpdateError> {
    source.say(BANNER).map_err(UpdateError::Prompt)?;
    let date = ask_date(source, today)?;
    source.say(COUNTS_HEADER).map_err(UpdateError::Prompt)?;
    let mut counts = Vec::with_capacity(countries.len());
    for country in countries {
        let count = ask_count(source, &format!("  {country}: "))?;
        counts.push((country.clone(), count));
    }
    Ok(WeekEntry { date, counts })
}

/// Ask once for the week date; blank means `today`.
pub fn ask_date(source: &mut impl LineSource, today: NaiveDate) -> Result<String, UpdateError> {
    let prompt = format!("Week date [YYYY-MM-DD] (default {today}): ");
    let raw = read_line(source, &prompt)?;
    parse_week_date(&raw, today).ok_or_else(|| {
        tracing::debug!(input = %raw.trim(), "rejected date");
        UpdateError::InvalidDate
    })
}

/// Ask for a count until the operator enters a valid one.
pub fn ask_count(source: &mut impl LineSource, prompt: &str) -> Result<u64, UpdateError> {
    loop {
        let raw = read_line(source, prompt)?;
        if let Some(count) = parse_count(&raw) {
            return Ok(count);
        }
        tracing::debug!(input = %raw.trim(), "rejected count");
        source.say(COUNT_RETRY_HINT).map_err(UpdateError::Prompt)?;
    }
}

fn read_line(source: &mut impl LineSource, prompt: &str) -> Result<String, UpdateError> {
    source
        .prompt_line(prompt)
        .map_err(UpdateError::Prompt)?
        .ok_or(UpdateError::Cancelled)
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
