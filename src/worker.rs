//! One fetch worker per source URL.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::FetchError;
use crate::fetch::HttpClient;
use crate::parser::parse_speeches;
use crate::speech::Speech;

/// What one source contributed: its parsed speeches, or the reason it
/// contributed nothing.
pub type FetchOutcome = Result<Vec<Speech>, FetchError>;

/// Fetches one source, parses it, and delivers exactly one [`FetchOutcome`]
/// on `tx` before terminating.
///
/// No retries and no timeout of its own; the coordinator owns the time
/// budget. If the coordinator has already given up on this request, the
/// send fails and the outcome is dropped.
#[tracing::instrument(skip(client, tx), fields(source = %url))]
pub async fn run<C>(client: Arc<C>, url: String, tx: mpsc::Sender<FetchOutcome>)
where
    C: HttpClient + ?Sized,
{
    let outcome = fetch_and_parse(client.as_ref(), &url).await;
    if tx.send(outcome).await.is_err() {
        debug!("result channel closed before outcome delivery");
    }
}

async fn fetch_and_parse<C>(client: &C, url: &str) -> FetchOutcome
where
    C: HttpClient + ?Sized,
{
    let bytes = client
        .get_bytes(url)
        .await
        .map_err(FetchError::Transport)?;
    debug!(bytes = bytes.len(), "source bytes received, parsing");
    Ok(parse_speeches(&bytes)?)
}
