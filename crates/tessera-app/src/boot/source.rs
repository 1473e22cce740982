use std::time::Duration;

use async_trait::async_trait;
use tessera_common::BootstrapError;
use tessera_config::BootstrapConfig;

/// Fetches the text bodies the bootstrap stages consume.
#[async_trait]
pub trait BootstrapSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, BootstrapError>;
}

/// `reqwest`-backed source.
pub struct HttpSource {
    http: reqwest::Client,
}

impl HttpSource {
    pub fn new(config: &BootstrapConfig) -> Result<Self, BootstrapError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BootstrapError::Fetch {
                url: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { http })
    }
}

#[async_trait]
impl BootstrapSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String, BootstrapError> {
        let fetch_err = |e: reqwest::Error| BootstrapError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.http.get(url).send().await.map_err(fetch_err)?;
        let status = response.status();
        tracing::info!(url, status = status.as_u16(), "bootstrap fetch");
        if !status.is_success() {
            return Err(BootstrapError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(fetch_err)
    }
}
