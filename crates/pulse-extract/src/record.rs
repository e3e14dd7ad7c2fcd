//! Canonical profile record shared by both platform extractors.

use serde::Serialize;

/// Sentinel used wherever the source data never yielded a value.
/// Distinct from the empty string: an empty biography is "found, empty",
/// `NOT_AVAILABLE` means the field was never observed.
pub const NOT_AVAILABLE: &str = "Not Available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized profile, one per query.
///
/// Always fully populated: extraction writes a field only when the source
/// yields it, otherwise the default from [`ProfileRecord::defaults`] stands.
/// Counts are never negative; text fields fall back to [`NOT_AVAILABLE`]
/// (or, for TikTok, the per-pattern "No <field> found" sentinel).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub platform: Platform,
    pub username: String,
    pub user_id: Option<String>,
    pub full_name: String,
    pub biography: String,
    /// Country/region code; Instagram never exposes it.
    pub region: String,
    pub profile_url: String,
    pub category: String,
    pub followers: u64,
    pub following: u64,
    /// Posts (Instagram) or videos (TikTok).
    pub posts: u64,
    pub is_verified: bool,
    pub is_private: Option<bool>,
    /// `None` means the source never said either way.
    pub is_professional_account: Option<bool>,
    /// `None` renders as "Not Available" at the boundary.
    pub average_likes: Option<u64>,
    pub average_comments: Option<u64>,
    /// Percentage, already rounded per platform (1 dp Instagram, 2 dp TikTok).
    pub engagement_rate: f64,
    /// TikTok only: per-video approximation of the engagement rate.
    pub advanced_engagement_rate: Option<f64>,
    pub profile_pic_url: String,
    /// TikTok only: de-duplicated bio/markup links, discovery order.
    pub social_links: Vec<String>,
}

impl ProfileRecord {
    /// The all-defaults record for a query. Identity fields (platform,
    /// username, profile URL) are filled from the query itself; everything
    /// else is at its declared default.
    #[must_use]
    pub fn defaults(platform: Platform, username: &str) -> Self {
        let profile_url = match platform {
            Platform::Instagram => format!("https://www.instagram.com/{username}/"),
            Platform::Tiktok => format!("https://www.tiktok.com/@{username}"),
        };
        Self {
            platform,
            username: username.to_string(),
            user_id: None,
            full_name: NOT_AVAILABLE.to_string(),
            biography: NOT_AVAILABLE.to_string(),
            region: NOT_AVAILABLE.to_string(),
            profile_url,
            category: NOT_AVAILABLE.to_string(),
            followers: 0,
            following: 0,
            posts: 0,
            is_verified: false,
            is_private: None,
            is_professional_account: None,
            average_likes: None,
            average_comments: None,
            engagement_rate: 0.0,
            advanced_engagement_rate: None,
            profile_pic_url: String::new(),
            social_links: Vec::new(),
        }
    }
}
