//! Pure reducers over the merged speech set.
//!
//! Each analyzer tallies per-speaker counts or totals into a `HashMap` and
//! selects a winner independently of the others.

pub mod speakers;

pub use speakers::{fewest_words, most_speeches_in_year, most_speeches_on_topic};
