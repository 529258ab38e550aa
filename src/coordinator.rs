//! Fan-out/fan-in over the requested sources.
//!
//! One worker task per URL, all feeding a single result channel; the
//! channel is the only shared resource and its send/receive pairs are the
//! only synchronization. Outcomes are merged in completion order, so the
//! merged record order is not deterministic across runs.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::fetch::HttpClient;
use crate::speech::Speech;
use crate::worker;

/// Fetches every source concurrently and merges the successful batches.
///
/// Waits up to `per_slot_timeout` for each of the N expected outcomes. A
/// slot that times out is logged and given up on, without aborting the
/// request or cancelling the worker: workers are detached and run to
/// completion even when nobody is left to read their outcome.
///
/// Failed sources contribute nothing; the merged set is whatever the
/// successful sources produced, possibly empty.
pub async fn gather<C>(client: Arc<C>, urls: Vec<String>, per_slot_timeout: Duration) -> Vec<Speech>
where
    C: HttpClient + ?Sized + 'static,
{
    let total = urls.len();
    if total == 0 {
        return Vec::new();
    }

    let (tx, mut rx) = mpsc::channel(total);
    for url in urls {
        tokio::spawn(worker::run(Arc::clone(&client), url, tx.clone()));
    }
    // the workers hold the only remaining senders
    drop(tx);

    let mut merged = Vec::new();
    let mut failed = 0usize;
    let mut timed_out = 0usize;

    for slot in 0..total {
        match timeout(per_slot_timeout, rx.recv()).await {
            Ok(Some(Ok(speeches))) => merged.extend(speeches),
            Ok(Some(Err(err))) => {
                failed += 1;
                warn!(slot, error = %err, "source contributed nothing");
            }
            Ok(None) => break,
            Err(_) => {
                timed_out += 1;
                warn!(
                    slot,
                    timeout_secs = per_slot_timeout.as_secs(),
                    "timed out waiting for source outcome"
                );
            }
        }
    }

    info!(
        sources = total,
        failed,
        timed_out,
        records = merged.len(),
        "fan-in complete"
    );
    merged
}
