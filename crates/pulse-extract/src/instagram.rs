//! Instagram profile extraction.
//!
//! The API endpoint and the web page embed the same user object under
//! different wrappers, so a single normalizer runs against whichever
//! shape the [`locate_user`] dispatcher finds.

use serde_json::Value;

use crate::engagement;
use crate::record::{Platform, ProfileRecord};

/// Known wrappers around the user object, tried in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseShape {
    /// `data.user` — the `web_profile_info` API response.
    ApiData,
    /// `entry_data.ProfilePage[0].graphql.user` — embedded `_sharedData`.
    ProfilePage,
    /// `graphql.user` — `__additionalDataLoaded` payloads.
    Graphql,
}

const SHAPES: [ResponseShape; 3] = [
    ResponseShape::ApiData,
    ResponseShape::ProfilePage,
    ResponseShape::Graphql,
];

impl ResponseShape {
    /// Resolves this shape's path into `body`. Any missing key or wrong
    /// type along the way yields `None`, never a panic — the caller moves
    /// on to the next candidate.
    fn lookup<'a>(self, body: &'a Value) -> Option<&'a Value> {
        let user = match self {
            ResponseShape::ApiData => body.get("data")?.get("user")?,
            ResponseShape::ProfilePage => body
                .get("entry_data")?
                .get("ProfilePage")?
                .get(0)?
                .get("graphql")?
                .get("user")?,
            ResponseShape::Graphql => body.get("graphql")?.get("user")?,
        };
        user.is_object().then_some(user)
    }
}

/// Finds the nested user object in a response body of any known shape.
/// Returns `None` when every candidate is exhausted.
#[must_use]
pub fn locate_user(body: &Value) -> Option<&Value> {
    for shape in SHAPES {
        if let Some(user) = shape.lookup(body) {
            tracing::debug!(?shape, "located Instagram user object");
            return Some(user);
        }
    }
    tracing::debug!("no known Instagram response shape matched");
    None
}

/// Extracts a [`ProfileRecord`] from a raw Instagram response body.
///
/// `body` is `None` when acquisition failed entirely; the all-defaults
/// record comes back in that case, and likewise when no shape matches.
/// Individual missing fields leave their defaults untouched.
#[must_use]
pub fn parse_profile(body: Option<&Value>, username: &str) -> ProfileRecord {
    let mut record = ProfileRecord::defaults(Platform::Instagram, username);

    let Some(user) = body.and_then(locate_user) else {
        return record;
    };
    normalize(user, &mut record);
    record
}

/// Maps the located user object onto the record. One routine for both the
/// API and web paths; the shape dispatcher has already flattened their
/// structural differences.
fn normalize(user: &Value, record: &mut ProfileRecord) {
    if let Some(id) = read_str(user, "id") {
        record.user_id = Some(id);
    }
    if let Some(full_name) = read_str(user, "full_name") {
        record.full_name = full_name;
    }
    if let Some(biography) = read_str(user, "biography") {
        record.biography = biography;
    }
    if let Some(verified) = user.get("is_verified").and_then(Value::as_bool) {
        record.is_verified = verified;
    }
    record.is_private = user.get("is_private").and_then(Value::as_bool);
    record.is_professional_account = user.get("is_business_account").and_then(Value::as_bool);
    if let Some(url) = read_str(user, "profile_pic_url_hd") {
        record.profile_pic_url = url;
    }
    if let Some(category) = read_str(user, "category_name") {
        record.category = category;
    }

    if let Some(count) = edge_count(user, "edge_followed_by") {
        record.followers = count;
    }
    if let Some(count) = edge_count(user, "edge_follow") {
        record.following = count;
    }
    if let Some(count) = edge_count(user, "edge_owner_to_timeline_media") {
        record.posts = count;
    }

    let (likes, comments) = collect_post_counts(user);
    record.average_likes = engagement::average(&likes);
    record.average_comments = engagement::average(&comments);
    record.engagement_rate = engagement::instagram_rate(record.followers, record.average_likes);
}

/// Per-post like and comment counts from the timeline edges. The two lists
/// are collected independently: a post missing only its comment count still
/// contributes its like count.
fn collect_post_counts(user: &Value) -> (Vec<u64>, Vec<u64>) {
    let mut likes = Vec::new();
    let mut comments = Vec::new();

    let edges = user
        .get("edge_owner_to_timeline_media")
        .and_then(|m| m.get("edges"))
        .and_then(Value::as_array);

    for edge in edges.into_iter().flatten() {
        let Some(node) = edge.get("node") else {
            continue;
        };
        if let Some(count) = edge_count(node, "edge_liked_by") {
            likes.push(count);
        }
        if let Some(count) = edge_count(node, "edge_media_to_comment") {
            comments.push(count);
        }
    }

    (likes, comments)
}

/// Non-empty string at `key`, if present.
fn read_str(source: &Value, key: &str) -> Option<String> {
    source
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The `{key: {count: N}}` pattern Instagram uses for every counter.
fn edge_count(source: &Value, key: &str) -> Option<u64> {
    source.get(key)?.get("count")?.as_u64()
}

#[cfg(test)]
#[path = "instagram_test.rs"]
mod tests;
