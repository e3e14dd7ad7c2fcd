//! TikTok profile extraction.
//!
//! TikTok scatters the user properties through a serialized script blob
//! rather than a single JSON subtree, so there is no structural locator:
//! an ordered table of field patterns runs independently against the raw
//! HTML, and each miss leaves a per-field "not found" sentinel.

use std::sync::LazyLock;

use regex::Regex;

use crate::coerce::coerce_count;
use crate::engagement;
use crate::links;
use crate::record::{Platform, ProfileRecord};

/// Field identifiers, one per pattern-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    UserId,
    UniqueId,
    Nickname,
    Followers,
    Following,
    Likes,
    Videos,
    Signature,
    Verified,
    SecUid,
    CommentSetting,
    PrivateAccount,
    Region,
    Heart,
    DiggCount,
    FriendCount,
    ProfilePic,
}

impl Field {
    /// Name used in the "No <name> found" sentinel.
    fn name(self) -> &'static str {
        match self {
            Field::UserId => "user_id",
            Field::UniqueId => "unique_id",
            Field::Nickname => "nickname",
            Field::Followers => "followers",
            Field::Following => "following",
            Field::Likes => "likes",
            Field::Videos => "videos",
            Field::Signature => "signature",
            Field::Verified => "verified",
            Field::SecUid => "secUid",
            Field::CommentSetting => "commentSetting",
            Field::PrivateAccount => "privateAccount",
            Field::Region => "region",
            Field::Heart => "heart",
            Field::DiggCount => "diggCount",
            Field::FriendCount => "friendCount",
            Field::ProfilePic => "profile_pic",
        }
    }
}

/// Ordered (field, pattern) table applied independently against the page.
static FIELD_PATTERNS: LazyLock<Vec<(Field, Regex)>> = LazyLock::new(|| {
    [
        (
            Field::UserId,
            r#""webapp\.user-detail":\{"userInfo":\{"user":\{"id":"(\d+)""#,
        ),
        (Field::UniqueId, r#""uniqueId":"(.*?)""#),
        (Field::Nickname, r#""nickname":"(.*?)""#),
        (Field::Followers, r#""followerCount":(\d+)"#),
        (Field::Following, r#""followingCount":(\d+)"#),
        (Field::Likes, r#""heartCount":(\d+)"#),
        (Field::Videos, r#""videoCount":(\d+)"#),
        (Field::Signature, r#""signature":"(.*?)""#),
        (Field::Verified, r#""verified":(true|false)"#),
        (Field::SecUid, r#""secUid":"(.*?)""#),
        (Field::CommentSetting, r#""commentSetting":(\d+)"#),
        (Field::PrivateAccount, r#""privateAccount":(true|false)"#),
        (Field::Region, r#""ttSeller":false,"region":"([^"]*)""#),
        (Field::Heart, r#""heart":(\d+)"#),
        (Field::DiggCount, r#""diggCount":(\d+)"#),
        (Field::FriendCount, r#""friendCount":(\d+)"#),
        (Field::ProfilePic, r#""avatarLarger":"(.*?)""#),
    ]
    .into_iter()
    .map(|(field, pattern)| (field, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// Raw field values pulled straight out of the page, before normalization.
/// `None` means the pattern never matched; the boundary renders that as
/// the field's "No <name> found" sentinel via [`TiktokFields::display`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TiktokFields {
    pub user_id: Option<String>,
    pub unique_id: Option<String>,
    pub nickname: Option<String>,
    pub followers: Option<String>,
    pub following: Option<String>,
    pub likes: Option<String>,
    pub videos: Option<String>,
    pub signature: Option<String>,
    pub verified: Option<String>,
    pub sec_uid: Option<String>,
    pub comment_setting: Option<String>,
    pub private_account: Option<String>,
    pub region: Option<String>,
    pub heart: Option<String>,
    pub digg_count: Option<String>,
    pub friend_count: Option<String>,
    pub profile_pic: Option<String>,
}

impl TiktokFields {
    /// Raw value, or the legacy per-field sentinel when the pattern missed.
    #[must_use]
    pub fn display(value: Option<&str>, field_name: &str) -> String {
        value.map_or_else(|| format!("No {field_name} found"), str::to_string)
    }
}

/// Runs the full pattern table against the raw page text.
#[must_use]
pub fn extract_fields(html: &str) -> TiktokFields {
    let mut fields = TiktokFields::default();

    for (field, pattern) in FIELD_PATTERNS.iter() {
        let value = pattern
            .captures(html)
            .map(|caps| caps[1].to_string());
        if value.is_none() {
            tracing::debug!(field = field.name(), "pattern had no match");
        }
        match field {
            Field::UserId => fields.user_id = value,
            Field::UniqueId => fields.unique_id = value,
            Field::Nickname => fields.nickname = value,
            Field::Followers => fields.followers = value,
            Field::Following => fields.following = value,
            Field::Likes => fields.likes = value,
            Field::Videos => fields.videos = value,
            Field::Signature => fields.signature = value,
            Field::Verified => fields.verified = value,
            Field::SecUid => fields.sec_uid = value,
            Field::CommentSetting => fields.comment_setting = value,
            Field::PrivateAccount => fields.private_account = value,
            Field::Region => fields.region = value,
            Field::Heart => fields.heart = value,
            Field::DiggCount => fields.digg_count = value,
            Field::FriendCount => fields.friend_count = value,
            Field::ProfilePic => fields.profile_pic = value.map(|v| links::unescape_json_url(&v)),
        }
    }

    fields
}

/// Extracts a [`ProfileRecord`] from a raw TikTok profile page.
///
/// `identifier` is the queried handle or user id; it backs the username
/// when the page never yields a `uniqueId`.
#[must_use]
pub fn parse_profile(html: &str, identifier: &str) -> ProfileRecord {
    let fields = extract_fields(html);

    let username = fields.unique_id.clone().unwrap_or_else(|| {
        identifier.trim_start_matches('@').to_string()
    });
    let mut record = ProfileRecord::defaults(Platform::Tiktok, &username);

    record.user_id = fields.user_id.clone();
    record.full_name = TiktokFields::display(fields.nickname.as_deref(), "nickname");
    record.biography = TiktokFields::display(fields.signature.as_deref(), "signature");
    record.region = TiktokFields::display(fields.region.as_deref(), "region");
    record.is_verified = fields.verified.as_deref() == Some("true");
    record.is_private = fields.private_account.as_deref().map(|v| v == "true");
    if let Some(pic) = &fields.profile_pic {
        record.profile_pic_url = pic.clone();
    }

    record.followers = fields.followers.as_deref().map_or(0, coerce_count);
    record.following = fields.following.as_deref().map_or(0, coerce_count);
    record.posts = fields.videos.as_deref().map_or(0, coerce_count);

    // Lifetime totals, not per-post samples: the page exposes no per-video
    // metrics, so average_likes carries the aggregate like count and the
    // rates come from the aggregate formulas.
    let total_likes = fields.likes.as_deref().map(coerce_count);
    record.average_likes = total_likes;
    let rates = engagement::tiktok_rates(total_likes.unwrap_or(0), record.posts, record.followers);
    record.engagement_rate = rates.basic;
    record.advanced_engagement_rate = Some(rates.advanced);

    let bio = fields.signature.as_deref().unwrap_or("");
    record.social_links = links::harvest_social_links(html, bio);

    record
}

#[cfg(test)]
#[path = "tiktok_test.rs"]
mod tests;
