//! Instagram acquisition: API endpoint first, embedded web JSON as fallback.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::client::ProfileClient;

/// Instagram's public web app id, required by the profile-info endpoint.
const IG_APP_ID: &str = "936619743392459";

/// `window._sharedData = {...};` blob in the profile page.
static SHARED_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script type="text/javascript">window\._sharedData = (.*?);</script>"#)
        .expect("valid regex")
});

/// `window.__additionalDataLoaded('path', {...});` payload.
static ADDITIONAL_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.__additionalDataLoaded\([^,]+,\s*(\{.*?\})\);").expect("valid regex")
});

impl ProfileClient {
    /// Fetches a raw Instagram profile body for `username`.
    ///
    /// Tries the `web_profile_info` API endpoint first; if that response is
    /// unusable, falls back to the profile page and pulls the embedded
    /// JSON out of the markup. Every acquisition failure resolves to
    /// `None` — the caller answers with the all-defaults record.
    pub async fn fetch_instagram(&self, username: &str) -> Option<Value> {
        if let Some(body) = self.fetch_instagram_api(username).await {
            tracing::debug!(username, "instagram API endpoint answered");
            return Some(body);
        }
        tracing::debug!(username, "instagram API unusable, falling back to web page");
        self.fetch_instagram_web(username).await
    }

    async fn fetch_instagram_api(&self, username: &str) -> Option<Value> {
        let url = format!(
            "{}/api/v1/users/web_profile_info/?username={username}",
            self.instagram_api_base
        );
        self.pre_request_delay().await;

        let response = match self
            .client
            .get(&url)
            .header("x-ig-app-id", IG_APP_ID)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(username, %error, "instagram API fetch failed");
                return None;
            }
        };

        let text = match response.text().await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(username, %error, "instagram API body read failed");
                return None;
            }
        };
        self.dump_body(&format!("{username}_api_response.json"), &text);

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(username, %error, "instagram API body is not JSON");
                return None;
            }
        };

        // The endpoint answers 200 with an empty or error payload for
        // missing profiles; only a body that carries a user object counts.
        has_user_object(&body).then_some(body)
    }

    async fn fetch_instagram_web(&self, username: &str) -> Option<Value> {
        let url = format!("{}/{username}/", self.instagram_web_base);
        self.pre_request_delay().await;

        let html = match self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(response) => match response.text().await {
                Ok(html) => html,
                Err(error) => {
                    tracing::warn!(username, %error, "instagram web body read failed");
                    return None;
                }
            },
            Err(error) => {
                tracing::warn!(username, %error, "instagram web fetch failed");
                return None;
            }
        };
        self.dump_body(&format!("{username}_web_response.html"), &html);

        for re in [&*SHARED_DATA_RE, &*ADDITIONAL_DATA_RE] {
            if let Some(caps) = re.captures(&html) {
                match serde_json::from_str::<Value>(&caps[1]) {
                    Ok(body) => return Some(body),
                    Err(error) => {
                        tracing::warn!(username, %error, "embedded instagram JSON did not parse");
                    }
                }
            }
        }
        None
    }
}

/// Whether the API body carries a `data.user` object worth parsing.
fn has_user_object(body: &Value) -> bool {
    body.get("data")
        .and_then(|data| data.get("user"))
        .is_some_and(Value::is_object)
}
