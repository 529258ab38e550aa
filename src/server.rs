//! The `/evaluation` HTTP endpoint.
//!
//! The handler always answers 200 with best-effort aggregates: sources that
//! fail or time out are logged server-side and contribute nothing, and a
//! request where everything failed is indistinguishable from one with no
//! data at all.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::analyzers::{fewest_words, most_speeches_in_year, most_speeches_on_topic};
use crate::config::AppConfig;
use crate::coordinator::gather;
use crate::fetch::{BasicClient, HttpClient};
use crate::speech::Evaluation;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<BasicClient>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: Arc::new(BasicClient::new()),
            config,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/evaluation", get(evaluation))
        .with_state(state)
}

/// Binds the listen address and serves the router until shutdown.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "evaluation server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// GET /evaluation?url=...&url=...
async fn evaluation(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Evaluation> {
    let urls = source_urls(params);
    info!(total = urls.len(), "evaluation request");
    Json(evaluate(Arc::clone(&state.client), &state.config, urls).await)
}

/// Extracts the source URLs from the raw query pairs.
///
/// Parameter names carry no meaning; every value of every parameter is a
/// source URL. Query parameters are multi-valued by nature, so there is no
/// scalar case to exclude.
pub fn source_urls(params: Vec<(String, String)>) -> Vec<String> {
    params.into_iter().map(|(_, value)| value).collect()
}

/// Runs the full pipeline: fan-out over `urls`, fan-in, then the three
/// analyzers over the merged set.
pub async fn evaluate<C>(client: Arc<C>, config: &AppConfig, urls: Vec<String>) -> Evaluation
where
    C: HttpClient + ?Sized + 'static,
{
    let speeches = gather(client, urls, config.fetch_timeout).await;

    Evaluation {
        most_speeches: most_speeches_in_year(&speeches, config.reference_year),
        most_security: most_speeches_on_topic(&speeches, &config.reference_topic),
        least_wordy: fewest_words(&speeches),
    }
}
