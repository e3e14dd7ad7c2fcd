//! TikTok acquisition: one profile-page fetch, no fallback URL.

use crate::client::ProfileClient;
use crate::error::AcquireError;

impl ProfileClient {
    /// Fetches the raw TikTok profile page for `identifier`.
    ///
    /// A leading `@` is stripped when querying by username; numeric ids
    /// (`by_id`) are used verbatim. Unlike the Instagram path, failures
    /// here are typed errors — the facade maps them to 404/500.
    ///
    /// # Errors
    ///
    /// - [`AcquireError::NotFound`] — HTTP 404 for the profile page.
    /// - [`AcquireError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`AcquireError::Http`] — network-level failure.
    pub async fn fetch_tiktok(
        &self,
        identifier: &str,
        by_id: bool,
    ) -> Result<String, AcquireError> {
        let handle = if by_id {
            identifier
        } else {
            identifier.trim_start_matches('@')
        };
        let url = format!("{}/@{handle}", self.tiktok_base);

        self.pre_request_delay().await;
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AcquireError::NotFound { url });
        }
        if !status.is_success() {
            return Err(AcquireError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let html = response.text().await?;
        self.dump_body(&format!("{handle}_web_response.html"), &html);
        Ok(html)
    }
}
