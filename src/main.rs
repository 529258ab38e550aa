//! CLI entry point for the speech evaluation service.
//!
//! Provides subcommands for running the HTTP server and for evaluating a
//! set of source URLs once from the command line.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use speech_eval::config::AppConfig;
use speech_eval::fetch::BasicClient;
use speech_eval::server::{self, AppState};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "speech_eval")]
#[command(about = "Aggregate speech statistics fetched from CSV sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP evaluation server
    Serve {
        /// Listen address, e.g. 0.0.0.0:8000 (overrides EVAL_ADDR)
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Fetch the given CSV sources once and print the evaluation as JSON
    Evaluate {
        /// Source URLs to fetch
        #[arg(value_name = "URL", required = true)]
        urls: Vec<String>,

        /// Year for the most-speeches aggregate (overrides EVAL_REFERENCE_YEAR)
        #[arg(short, long)]
        year: Option<i32>,

        /// Topic for the most-on-topic aggregate (overrides EVAL_REFERENCE_TOPIC)
        #[arg(short, long)]
        topic: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/speech_eval.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("speech_eval.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;

    match cli.command {
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                config.addr = addr.parse()?;
            }
            server::serve(AppState::new(config)).await?;
        }
        Commands::Evaluate { urls, year, topic } => {
            if let Some(year) = year {
                config.reference_year = year;
            }
            if let Some(topic) = topic {
                config.reference_topic = topic;
            }

            let client = Arc::new(BasicClient::new());
            let evaluation = server::evaluate(client, &config, urls).await;
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
    }

    Ok(())
}
