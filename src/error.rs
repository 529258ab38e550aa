//! Error types for the fetch-and-parse pipeline.
//!
//! Both variants of [`FetchError`] are terminal for a single source: the
//! source contributes no records and the failure is logged, never surfaced
//! in the HTTP response. Row-level problems (a non-numeric word count, an
//! unparseable date) are not errors at this level; they are skipped and
//! logged where they occur.

use thiserror::Error;

/// A structurally invalid CSV stream. Fails the whole source.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed csv stream: {0}")]
    Malformed(#[from] csv::Error),
    #[error("expected {expected} columns, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// Why a single source produced no records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("download failed: {0}")]
    Transport(anyhow::Error),
    #[error("read failed: {0}")]
    Parse(#[from] ParseError),
}
