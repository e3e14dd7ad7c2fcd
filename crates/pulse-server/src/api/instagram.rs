//! Instagram endpoint.
//!
//! Acquisition failures still answer 200 with the all-defaults record:
//! callers rely on a fully-shaped body either way.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Serialize;
use serde_json::Value;

use pulse_extract::{instagram, ProfileRecord, NOT_AVAILABLE};

use super::{bool_or_not_available, count_or_not_available, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub(super) struct InstagramUserInfo {
    platform: &'static str,
    username: String,
    full_name: String,
    biography: String,
    country: &'static str,
    url: String,
    category: String,
    followers: u64,
    following: u64,
    posts: u64,
    is_verified: bool,
    is_private: Value,
    is_professional_account: Value,
    average_likes: Value,
    average_comments: Value,
    engagement_rate: f64,
    profile_pic_url_hd: String,
}

impl InstagramUserInfo {
    fn from_record(record: &ProfileRecord) -> Self {
        Self {
            platform: record.platform.as_str(),
            username: record.username.clone(),
            full_name: record.full_name.clone(),
            biography: record.biography.clone(),
            // Instagram exposes no region signal at all.
            country: NOT_AVAILABLE,
            url: record.profile_url.clone(),
            category: record.category.clone(),
            followers: record.followers,
            following: record.following,
            posts: record.posts,
            is_verified: record.is_verified,
            is_private: bool_or_not_available(record.is_private),
            is_professional_account: bool_or_not_available(record.is_professional_account),
            average_likes: count_or_not_available(record.average_likes),
            average_comments: count_or_not_available(record.average_comments),
            engagement_rate: record.engagement_rate,
            profile_pic_url_hd: record.profile_pic_url.clone(),
        }
    }
}

pub async fn user_info(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(username): Path<String>,
) -> Json<InstagramUserInfo> {
    let body = state.client.fetch_instagram(&username).await;
    if body.is_none() {
        tracing::warn!(
            request_id = %request_id.0,
            username,
            "instagram acquisition failed, answering defaults"
        );
    }
    let record = instagram::parse_profile(body.as_ref(), &username);
    Json(InstagramUserInfo::from_record(&record))
}
