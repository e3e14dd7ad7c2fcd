use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use reqwest::Client;

use pulse_core::AppConfig;

use crate::error::AcquireError;

pub(crate) const INSTAGRAM_API_BASE: &str = "https://i.instagram.com";
pub(crate) const INSTAGRAM_WEB_BASE: &str = "https://www.instagram.com";
pub(crate) const TIKTOK_BASE: &str = "https://www.tiktok.com";

/// HTTP client for public profile pages and endpoints.
///
/// Sends a browser-like User-Agent and sleeps a jittered delay before each
/// request to keep the rate-limit risk down. When a dump directory is
/// configured, raw response bodies are written there for debugging.
pub struct ProfileClient {
    pub(crate) client: Client,
    pub(crate) delay_min_ms: u64,
    pub(crate) delay_max_ms: u64,
    pub(crate) dump_dir: Option<PathBuf>,
    pub(crate) instagram_api_base: String,
    pub(crate) instagram_web_base: String,
    pub(crate) tiktok_base: String,
}

impl ProfileClient {
    /// Creates a `ProfileClient` from the app configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AcquireError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, AcquireError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            delay_min_ms: config.fetch_delay_min_ms,
            delay_max_ms: config.fetch_delay_max_ms,
            dump_dir: config.dump_dir.clone(),
            instagram_api_base: INSTAGRAM_API_BASE.to_string(),
            instagram_web_base: INSTAGRAM_WEB_BASE.to_string(),
            tiktok_base: TIKTOK_BASE.to_string(),
        })
    }

    /// Points every endpoint at `base` instead of the real hosts.
    /// Intended for tests against a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.instagram_api_base = base.to_string();
        self.instagram_web_base = base.to_string();
        self.tiktok_base = base.to_string();
        self
    }

    /// Sleeps a uniformly jittered delay before a fetch. A zero-width
    /// range (0..=0) disables the delay entirely, which tests rely on.
    pub(crate) async fn pre_request_delay(&self) {
        let delay_ms = if self.delay_max_ms == 0 {
            0
        } else {
            rand::rng().random_range(self.delay_min_ms..=self.delay_max_ms)
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }

    /// Best-effort debug dump of a raw response body; failures are logged
    /// and swallowed because dumps are never load-bearing.
    pub(crate) fn dump_body(&self, file_name: &str, body: &str) {
        let Some(dir) = &self.dump_dir else {
            return;
        };
        let path = dir.join(file_name);
        if let Err(error) = std::fs::create_dir_all(dir).and_then(|()| std::fs::write(&path, body))
        {
            tracing::warn!(path = %path.display(), %error, "failed to write debug dump");
        }
    }
}
