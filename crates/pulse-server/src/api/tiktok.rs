//! TikTok endpoints.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use pulse_acquire::AcquireError;
use pulse_extract::{tiktok, ProfileRecord};

use super::{bool_or_not_available, count_or_not_available, ApiError, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub struct TiktokQuery {
    #[serde(default)]
    by_id: bool,
}

#[derive(Debug, Serialize)]
struct TiktokUserInfo {
    platform: &'static str,
    username: String,
    full_name: String,
    biography: String,
    country: String,
    url: String,
    category: String,
    followers: u64,
    following: u64,
    posts: u64,
    is_verified: bool,
    is_professional_account: Value,
    average_likes: Value,
    average_comments: Value,
    engagement_rate: f64,
    profile_pic_url_hd: String,
    social_links: Vec<String>,
}

impl TiktokUserInfo {
    fn from_record(record: &ProfileRecord) -> Self {
        Self {
            platform: record.platform.as_str(),
            username: record.username.clone(),
            full_name: record.full_name.clone(),
            biography: record.biography.clone(),
            country: record.region.clone(),
            url: record.profile_url.clone(),
            category: record.category.clone(),
            followers: record.followers,
            following: record.following,
            posts: record.posts,
            is_verified: record.is_verified,
            is_professional_account: bool_or_not_available(record.is_professional_account),
            average_likes: count_or_not_available(record.average_likes),
            average_comments: count_or_not_available(record.average_comments),
            // This endpoint has always reported the per-video rate under
            // the plain `engagement_rate` key; keep that contract.
            engagement_rate: record
                .advanced_engagement_rate
                .unwrap_or(record.engagement_rate),
            profile_pic_url_hd: record.profile_pic_url.clone(),
            social_links: record.social_links.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RateDescription {
    basic: &'static str,
    advanced: &'static str,
}

/// The full profile shape again, with the rate fields broken out. Under
/// the plain `engagement_rate` key this endpoint reports the basic rate.
#[derive(Debug, Serialize)]
struct TiktokEngagement {
    platform: &'static str,
    username: String,
    full_name: String,
    biography: String,
    country: String,
    url: String,
    category: String,
    followers: u64,
    following: u64,
    posts: u64,
    is_verified: bool,
    is_professional_account: Value,
    average_likes: Value,
    average_comments: Value,
    engagement_rate: f64,
    basic_engagement_rate: f64,
    advanced_engagement_rate: f64,
    description: RateDescription,
    profile_pic_url_hd: String,
}

impl TiktokEngagement {
    fn from_record(record: &ProfileRecord) -> Self {
        Self {
            platform: record.platform.as_str(),
            username: record.username.clone(),
            full_name: record.full_name.clone(),
            biography: record.biography.clone(),
            country: record.region.clone(),
            url: record.profile_url.clone(),
            category: record.category.clone(),
            followers: record.followers,
            following: record.following,
            posts: record.posts,
            is_verified: record.is_verified,
            is_professional_account: bool_or_not_available(record.is_professional_account),
            average_likes: count_or_not_available(record.average_likes),
            average_comments: count_or_not_available(record.average_comments),
            engagement_rate: record.engagement_rate,
            basic_engagement_rate: record.engagement_rate,
            advanced_engagement_rate: record
                .advanced_engagement_rate
                .unwrap_or(record.engagement_rate),
            description: RateDescription {
                basic: "(likes / followers) * 100",
                advanced: "(avg likes per video / followers) * 100",
            },
            profile_pic_url_hd: record.profile_pic_url.clone(),
        }
    }
}

pub async fn user_info(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(identifier): Path<String>,
    Query(query): Query<TiktokQuery>,
) -> Response {
    match fetch_record(&state, &request_id, &identifier, query.by_id).await {
        Ok(record) => Json(TiktokUserInfo::from_record(&record)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn engagement_rate(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(identifier): Path<String>,
    Query(query): Query<TiktokQuery>,
) -> Response {
    match fetch_record(&state, &request_id, &identifier, query.by_id).await {
        Ok(record) => Json(TiktokEngagement::from_record(&record)).into_response(),
        Err(error) => error.into_response(),
    }
}

async fn fetch_record(
    state: &AppState,
    request_id: &RequestId,
    identifier: &str,
    by_id: bool,
) -> Result<ProfileRecord, ApiError> {
    match state.client.fetch_tiktok(identifier, by_id).await {
        Ok(html) => Ok(tiktok::parse_profile(&html, identifier)),
        Err(error @ (AcquireError::NotFound { .. } | AcquireError::UnexpectedStatus { .. })) => {
            tracing::warn!(
                request_id = %request_id.0,
                identifier,
                %error,
                "tiktok profile unavailable"
            );
            Err(ApiError::not_found())
        }
        Err(error) => {
            tracing::error!(
                request_id = %request_id.0,
                identifier,
                %error,
                "tiktok fetch failed"
            );
            Err(ApiError::internal(error.to_string()))
        }
    }
}
