//! Social link harvesting from TikTok profile pages.
//!
//! Five independent strategies scan the raw markup, then the biography is
//! scanned for inline handles and an email address. Strategies overlap on
//! purpose; the substring-containment de-dup keeps the noise down.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

/// Anchor whose href goes through the bio-link redirect, capturing the full
/// href and its `target` parameter.
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href="(https://www\.tiktok\.com/link/v2\?[^"]*?scene=bio_url[^"]*?target=([^"&]+))""#)
        .expect("valid regex")
});

/// Link-styled span contents.
static SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span[^>]*class="[^"]*SpanLink[^"]*">([^<]+)</span>"#).expect("valid regex")
});

/// Any bio-link redirect target, independent of anchor structure.
static TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"scene=bio_url[^"]*?target=([^"&]+)"#).expect("valid regex"));

/// Structured bio-link entries in the page's JSON blob.
static BIOLINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""bioLink":\{"link":"([^"]+)","risk":(\d+)\}"#).expect("valid regex")
});

/// Generic share-URL JSON fields.
static SHARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""shareUrl":"([^"]+)""#).expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("valid regex"));

/// Inline `prefix: @handle` mentions recognized in biographies.
#[derive(Debug, Clone, Copy)]
enum HandleKind {
    Instagram,
    Snapchat,
    Twitter,
    Facebook,
    Youtube,
    Telegram,
}

impl HandleKind {
    fn format(self, handle: &str) -> String {
        match self {
            HandleKind::Instagram => format!("Instagram: @{handle}"),
            HandleKind::Snapchat => format!("Snapchat: {handle}"),
            HandleKind::Twitter => format!("Twitter/X: @{handle}"),
            HandleKind::Facebook => format!("Facebook: {handle}"),
            HandleKind::Youtube => format!("YouTube: {handle}"),
            HandleKind::Telegram => format!("Telegram: @{handle}"),
        }
    }
}

/// Ordered handle pattern table. Prefixes are deliberately loose ("ig:" with
/// no word boundary) to match what people actually type in bios.
static HANDLE_PATTERNS: LazyLock<Vec<(HandleKind, Regex)>> = LazyLock::new(|| {
    [
        (HandleKind::Instagram, r"(?i)ig:\s*@?([a-zA-Z0-9._]+)"),
        (
            HandleKind::Snapchat,
            r"(?i)(?:sc|snapchat):\s*@?([a-zA-Z0-9._]+)",
        ),
        (
            HandleKind::Twitter,
            r"(?i)(?:twitter|x):\s*@?([a-zA-Z0-9._]+)",
        ),
        (HandleKind::Facebook, r"(?i)fb:\s*@?([a-zA-Z0-9._]+)"),
        (
            HandleKind::Youtube,
            r"(?i)(?:yt|youtube):\s*@?([a-zA-Z0-9._]+)",
        ),
        (HandleKind::Telegram, r"(?i)telegram:\s*@?([a-zA-Z0-9._]+)"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// Rewrites JSON-escaped `/` sequences back to `/`.
pub(crate) fn unescape_json_url(raw: &str) -> String {
    raw.replace("\\u002F", "/")
}

/// Harvests social links from the raw page markup and the extracted
/// biography. Entries preserve first-discovery order across strategies;
/// a candidate whose URL/handle already appears as a substring of any
/// accepted entry is discarded. The containment check is intentionally
/// permissive — it suppresses near-duplicates at the cost of occasionally
/// eating a genuinely new link that happens to be a substring.
#[must_use]
pub fn harvest_social_links(html: &str, bio: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();

    // Strategy 1: redirect anchors paired with their link-styled span text.
    for caps in ANCHOR_RE.captures_iter(html) {
        let full_url = &caps[1];
        let target = percent_decode(&caps[2]);
        let text = span_text_after(
            html,
            &format!(r#"href="{}""#, regex::escape(full_url)),
            "[^>]*SpanLink[^>]*",
        )
        .unwrap_or_else(|| target.clone());
        push_unique(&mut links, &target, format!("Link: {text} - {target}"));
    }

    // Strategy 2: standalone link-styled spans that look like URLs.
    for caps in SPAN_RE.captures_iter(html) {
        let span = &caps[1];
        if span.contains('.') && !span.contains(' ') {
            push_unique(&mut links, span, format!("Link: {span} - {span}"));
        }
    }

    // Strategy 3: any redirect target anywhere in the markup.
    for caps in TARGET_RE.captures_iter(html) {
        let target = percent_decode(&caps[1]);
        if links.iter().any(|s| s.contains(&target)) {
            continue;
        }
        let text = span_text_after(html, &format!("target={}", regex::escape(&caps[1])), "[^>]*")
            .unwrap_or_else(|| target.clone());
        push_unique(&mut links, &target, format!("Link: {text} - {target}"));
    }

    // Strategy 4: structured bioLink JSON entries.
    for caps in BIOLINK_RE.captures_iter(html) {
        let url = unescape_json_url(&caps[1]);
        push_unique(&mut links, &url, format!("\u{1f48e} **{url}**: `{url}`"));
    }

    // Strategy 5: generic share URLs.
    for caps in SHARE_URL_RE.captures_iter(html) {
        let url = unescape_json_url(&caps[1]);
        push_unique(&mut links, &url, format!("\u{1f48e} **{url}**: `{url}`"));
    }

    // Inline handles and email live in the biography text only.
    for (kind, pattern) in HANDLE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(bio) {
            let entry = kind.format(&caps[1]);
            let needle = entry.clone();
            push_unique(&mut links, &needle, entry);
        }
    }
    if let Some(m) = EMAIL_RE.find(bio) {
        let email = m.as_str().to_string();
        push_unique(&mut links, &email, format!("Email: {email}"));
    }

    tracing::debug!(count = links.len(), "harvested social links");
    links
}

/// Accepts `entry` unless `needle` is already contained in any accepted
/// entry's formatted string.
fn push_unique(links: &mut Vec<String>, needle: &str, entry: String) {
    if !links.iter().any(|s| s.contains(needle)) {
        links.push(entry);
    }
}

/// Looks for link text in a span following `anchor_pattern` (already
/// regex-escaped by the caller). `span_attrs` constrains the span's
/// attribute list, e.g. to require a link-styled class.
fn span_text_after(html: &str, anchor_pattern: &str, span_attrs: &str) -> Option<String> {
    let pattern = format!(r"(?s){anchor_pattern}[^>]*>.*?<span{span_attrs}>([^<]+)</span>");
    let re = Regex::new(&pattern).ok()?;
    re.captures(html).map(|caps| caps[1].to_string())
}

fn percent_decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;
