//! Environment-backed service configuration.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REFERENCE_YEAR: i32 = 2013;
pub const DEFAULT_REFERENCE_TOPIC: &str = "Internal Security";

/// Service configuration, shared read-only across requests.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address of the HTTP server.
    pub addr: SocketAddr,
    /// How long the coordinator waits for each source outcome.
    pub fetch_timeout: Duration,
    /// Year used by the most-speeches analyzer.
    pub reference_year: i32,
    /// Topic used by the most-on-topic analyzer.
    pub reference_topic: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.parse().unwrap(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            reference_year: DEFAULT_REFERENCE_YEAR,
            reference_topic: DEFAULT_REFERENCE_TOPIC.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `EVAL_*` environment variables, falling
    /// back to the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("EVAL_ADDR") {
            config.addr = addr
                .parse()
                .with_context(|| format!("invalid EVAL_ADDR: {addr}"))?;
        }
        if let Ok(secs) = std::env::var("EVAL_FETCH_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("invalid EVAL_FETCH_TIMEOUT_SECS: {secs}"))?;
            config.fetch_timeout = Duration::from_secs(secs);
        }
        if let Ok(year) = std::env::var("EVAL_REFERENCE_YEAR") {
            config.reference_year = year
                .parse()
                .with_context(|| format!("invalid EVAL_REFERENCE_YEAR: {year}"))?;
        }
        if let Ok(topic) = std::env::var("EVAL_REFERENCE_TOPIC") {
            config.reference_topic = topic;
        }

        Ok(config)
    }
}
