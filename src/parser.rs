//! CSV parser for speech data.
//!
//! Expects exactly [`COLUMNS`] columns per row with a header row, in the
//! order speaker, topic, date, words. The header is discarded
//! unconditionally. Rows whose word count does not parse as an integer are
//! skipped individually; a structurally broken stream fails the whole parse.

use tracing::warn;

use crate::error::ParseError;
use crate::speech::Speech;

pub const COLUMNS: usize = 4;

/// Parses a CSV byte stream into speeches.
///
/// Whitespace is trimmed from every field. A stream with a header and no
/// data rows yields an empty vec.
///
/// # Errors
///
/// Returns [`ParseError`] if the stream is not valid CSV/UTF-8 or a row
/// does not have exactly [`COLUMNS`] fields.
pub fn parse_speeches(bytes: &[u8]) -> Result<Vec<Speech>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut speeches = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let record = row?;
        if record.len() != COLUMNS {
            return Err(ParseError::FieldCount {
                expected: COLUMNS,
                found: record.len(),
            });
        }

        let words = match record[3].parse::<u64>() {
            Ok(words) => words,
            Err(err) => {
                // idx 0 is the first data row, i.e. line 2 of the stream
                warn!(line = idx + 2, value = &record[3], error = %err, "skipping row with non-numeric word count");
                continue;
            }
        };

        speeches.push(Speech {
            speaker: record[0].to_string(),
            topic: record[1].to_string(),
            date: record[2].to_string(),
            words,
        });
    }

    Ok(speeches)
}
