use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// The HTTP seam between the fetch workers and the network.
///
/// Production code uses [`BasicClient`]; tests substitute stub
/// implementations to exercise the pipeline without a network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_bytes(&self, url: &str) -> Result<Bytes>;
}

pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn get_bytes(&self, url: &str) -> Result<Bytes> {
        let resp = self.0.get(url).send().await?;
        Ok(resp.bytes().await?)
    }
}
