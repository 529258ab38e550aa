//! Per-speaker tallies and winner selection.
//!
//! Winner selection iterates the tally map and replaces the current best
//! only on a strict improvement. `HashMap` iteration order is unspecified,
//! so an exact tie goes to whichever candidate happens to be visited first;
//! that tie-break is intentionally left non-deterministic rather than fixed
//! to insertion or lexicographic order.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::speech::Speech;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The speaker with the most speeches held in `year`.
///
/// Speeches whose date does not parse as `YYYY-MM-DD` are logged and
/// excluded from this tally only. Returns `""` when no speech qualifies.
pub fn most_speeches_in_year(speeches: &[Speech], year: i32) -> String {
    let mut counts: HashMap<&str, u64> = HashMap::new();

    for speech in speeches {
        let date = match NaiveDate::parse_from_str(&speech.date, DATE_FORMAT) {
            Ok(date) => date,
            Err(err) => {
                warn!(date = %speech.date, error = %err, "skipping speech with unparseable date");
                continue;
            }
        };

        if date.year() == year {
            *counts.entry(&speech.speaker).or_insert(0) += 1;
        }
    }

    top_speaker(&counts)
}

/// The speaker with the most speeches on exactly `topic` (case-sensitive).
///
/// Returns `""` when no speech qualifies.
pub fn most_speeches_on_topic(speeches: &[Speech], topic: &str) -> String {
    let mut counts: HashMap<&str, u64> = HashMap::new();

    for speech in speeches {
        if speech.topic == topic {
            *counts.entry(&speech.speaker).or_insert(0) += 1;
        }
    }

    top_speaker(&counts)
}

/// The speaker with the smallest total word count across all speeches.
///
/// Returns `""` when there are no speeches at all.
pub fn fewest_words(speeches: &[Speech]) -> String {
    let mut totals: HashMap<&str, u64> = HashMap::new();

    for speech in speeches {
        let total = totals.entry(&speech.speaker).or_insert(0);
        *total = total.saturating_add(speech.words);
    }

    let mut fewest = "";
    let mut fewest_total = u64::MAX;
    for (speaker, total) in &totals {
        if *total < fewest_total {
            fewest = speaker;
            fewest_total = *total;
        }
    }

    fewest.to_string()
}

fn top_speaker(counts: &HashMap<&str, u64>) -> String {
    let mut top = "";
    let mut top_count = 0u64;
    for (speaker, count) in counts {
        if *count > top_count {
            top = speaker;
            top_count = *count;
        }
    }

    top.to_string()
}
