//! End-to-end tests over real loopback HTTP: a fixture server hands out CSV
//! files, the evaluation server fans out to it, and the assertions read the
//! JSON response exactly as a client would.

use std::net::SocketAddr;

use axum::{Router, routing::get};
use speech_eval::config::AppConfig;
use speech_eval::server::{AppState, router};
use speech_eval::speech::Evaluation;

const POLITICS_CSV: &str = concat!(
    "Speaker, Topic, Date, Words\n",
    "Alexander Abel, Education Policy, 2012-10-30, 5310\n",
    "Bernhard Belling, Coal Subsidies, 2012-11-05, 1210\n",
    "Caesare Collins, Coal Subsidies, 2012-11-06, 1119\n",
    "Alexander Abel, Internal Security, 2012-12-11, 911\n",
);

const FOLLOWUP_CSV: &str = concat!(
    "Speaker, Topic, Date, Words\n",
    "Alexander Abel, Education Policy, 2013-01-15, 800\n",
    "Bernhard Belling, Internal Security, 2013-03-02, 1500\n",
    "Bernhard Belling, Internal Security, 2013-05-11, 700\n",
);

const BROKEN_CSV: &str = concat!(
    "Speaker, Topic, Date, Words\n",
    "Alexander Abel, Internal Security, 2013-01-15\n",
);

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_fixture_server() -> SocketAddr {
    let app = Router::new()
        .route("/politics.csv", get(|| async { POLITICS_CSV }))
        .route("/followup.csv", get(|| async { FOLLOWUP_CSV }))
        .route("/broken.csv", get(|| async { BROKEN_CSV }));
    spawn(app).await
}

async fn spawn_evaluation_server() -> SocketAddr {
    spawn(router(AppState::new(AppConfig::default()))).await
}

async fn get_evaluation(app: SocketAddr, query: &str) -> Evaluation {
    let resp = reqwest::get(format!("http://{app}/evaluation{query}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn test_full_pipeline_over_two_sources() {
    let fixtures = spawn_fixture_server().await;
    let app = spawn_evaluation_server().await;

    let evaluation = get_evaluation(
        app,
        &format!("?url1=http://{fixtures}/politics.csv&url2=http://{fixtures}/followup.csv"),
    )
    .await;

    // 2013 speeches: Belling 2, Abel 1. Internal Security: Belling 2, Abel 1.
    // Word totals: Collins 1119, Belling 3410, Abel 7021.
    assert_eq!(evaluation.most_speeches, "Bernhard Belling");
    assert_eq!(evaluation.most_security, "Bernhard Belling");
    assert_eq!(evaluation.least_wordy, "Caesare Collins");
}

#[tokio::test]
async fn test_unreachable_source_does_not_block_the_rest() {
    let fixtures = spawn_fixture_server().await;
    let app = spawn_evaluation_server().await;

    // port 1 refuses the connection immediately
    let evaluation = get_evaluation(
        app,
        &format!("?url=http://127.0.0.1:1/nope.csv&url=http://{fixtures}/followup.csv"),
    )
    .await;

    // followup.csv alone: Abel's single 800-word speech is the smallest total
    assert_eq!(evaluation.most_speeches, "Bernhard Belling");
    assert_eq!(evaluation.most_security, "Bernhard Belling");
    assert_eq!(evaluation.least_wordy, "Alexander Abel");
}

#[tokio::test]
async fn test_structurally_broken_source_contributes_nothing() {
    let fixtures = spawn_fixture_server().await;
    let app = spawn_evaluation_server().await;

    let evaluation = get_evaluation(
        app,
        &format!("?url=http://{fixtures}/broken.csv&url=http://{fixtures}/politics.csv"),
    )
    .await;

    // only politics.csv counts, and it has no 2013 speeches
    assert_eq!(evaluation.most_speeches, "");
    assert_eq!(evaluation.most_security, "Alexander Abel");
    assert_eq!(evaluation.least_wordy, "Caesare Collins");
}

#[tokio::test]
async fn test_all_sources_failing_looks_like_empty_data() {
    let app = spawn_evaluation_server().await;

    let evaluation = get_evaluation(
        app,
        "?url=http://127.0.0.1:1/a.csv&url=http://127.0.0.1:1/b.csv",
    )
    .await;

    assert_eq!(evaluation.most_speeches, "");
    assert_eq!(evaluation.most_security, "");
    assert_eq!(evaluation.least_wordy, "");
}

#[tokio::test]
async fn test_no_sources_yields_empty_aggregates() {
    let app = spawn_evaluation_server().await;

    let evaluation = get_evaluation(app, "").await;

    assert_eq!(
        evaluation,
        Evaluation {
            most_speeches: String::new(),
            most_security: String::new(),
            least_wordy: String::new(),
        }
    );
}

#[tokio::test]
async fn test_identical_requests_are_idempotent() {
    let fixtures = spawn_fixture_server().await;
    let app = spawn_evaluation_server().await;
    let query = format!("?url=http://{fixtures}/politics.csv&url=http://{fixtures}/followup.csv");

    let first = get_evaluation(app, &query).await;
    let second = get_evaluation(app, &query).await;

    assert_eq!(first, second);
}
