use serde::{Deserialize, Serialize};

/// One parsed speech row: who spoke, on what, when, and how many words.
///
/// The date is kept in its textual `YYYY-MM-DD` form; only the year-based
/// analyzer interprets it as a calendar date. All fields are trimmed at
/// ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    pub speaker: String,
    pub topic: String,
    pub date: String,
    pub words: u64,
}

/// The response body of the `/evaluation` endpoint.
///
/// Field names are a stable wire contract. Each value is a speaker name, or
/// the empty string when no qualifying data exists.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    #[serde(rename = "mostSpeeches")]
    pub most_speeches: String,
    #[serde(rename = "mostSecurity")]
    pub most_security: String,
    #[serde(rename = "leastWordy")]
    pub least_wordy: String,
}
