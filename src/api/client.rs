use anyhow::{Context, Result};
use reqwest::Client;

pub struct PlatformClient {
    pub base_url: String,
    pub api_key: String,
    pub http: Client,
}

impl PlatformClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }
}
