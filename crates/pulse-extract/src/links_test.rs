use super::*;

#[test]
fn anchor_strategy_pairs_target_with_span_text() {
    let html = concat!(
        r#"<a href="https://www.tiktok.com/link/v2?scene=bio_url&target=http%3A%2F%2Fa.com">"#,
        r#"<span class="css-x SpanLink ey">my site</span></a>"#
    );
    let links = harvest_social_links(html, "");
    assert_eq!(links, vec!["Link: my site - http://a.com".to_string()]);
}

#[test]
fn anchor_without_span_falls_back_to_target_as_text() {
    let html = r#"<a href="https://www.tiktok.com/link/v2?scene=bio_url&target=http%3A%2F%2Fa.com">go</a>"#;
    let links = harvest_social_links(html, "");
    assert_eq!(links, vec!["Link: http://a.com - http://a.com".to_string()]);
}

#[test]
fn span_strategy_requires_dot_and_no_space() {
    let html = concat!(
        r#"<span class="SpanLink">mysite.example</span>"#,
        r#"<span class="SpanLink">just words here</span>"#,
        r#"<span class="SpanLink">nodotsatall</span>"#
    );
    let links = harvest_social_links(html, "");
    assert_eq!(
        links,
        vec!["Link: mysite.example - mysite.example".to_string()]
    );
}

#[test]
fn bare_target_strategy_catches_structureless_redirects() {
    let html = r#"<script>u="...scene=bio_url&target=http%3A%2F%2Fb.org";</script>"#;
    let links = harvest_social_links(html, "");
    assert_eq!(links, vec!["Link: http://b.org - http://b.org".to_string()]);
}

#[test]
fn later_strategy_duplicate_is_suppressed() {
    // Strategy 1 accepts the anchor; strategy 3 re-finds the same target.
    let html = concat!(
        r#"<a href="https://www.tiktok.com/link/v2?scene=bio_url&target=http%3A%2F%2Fa.com">"#,
        r#"<span class="SpanLink">X</span></a>"#,
        r#"<div data-u="scene=bio_url&target=http%3A%2F%2Fa.com"></div>"#
    );
    let links = harvest_social_links(html, "");
    assert_eq!(links, vec!["Link: X - http://a.com".to_string()]);
}

#[test]
fn biolink_json_strategy_unescapes_slashes() {
    let html = r#"{"bioLink":{"link":"https://shop.example","risk":0}}"#;
    let links = harvest_social_links(html, "");
    assert_eq!(
        links,
        vec!["\u{1f48e} **https://shop.example**: `https://shop.example`".to_string()]
    );
}

#[test]
fn share_url_strategy_is_deduped_against_biolink() {
    let html = concat!(
        r#"{"bioLink":{"link":"https://shop.example","risk":0}}"#,
        r#"{"shareUrl":"https://shop.example"}"#
    );
    let links = harvest_social_links(html, "");
    assert_eq!(links.len(), 1);
}

#[test]
fn bio_handles_are_extracted_per_platform() {
    let bio = "IG: @foo.bar | sc: snapuser | Twitter: @tweets | fb: fbuser | yt: tuber | telegram: @tg";
    let links = harvest_social_links("", bio);
    assert!(links.contains(&"Instagram: @foo.bar".to_string()));
    assert!(links.contains(&"Snapchat: snapuser".to_string()));
    assert!(links.contains(&"Twitter/X: @tweets".to_string()));
    assert!(links.contains(&"Facebook: fbuser".to_string()));
    assert!(links.contains(&"YouTube: tuber".to_string()));
    assert!(links.contains(&"Telegram: @tg".to_string()));
}

#[test]
fn email_in_bio_is_extracted() {
    let links = harvest_social_links("", "bookings: me@example.com");
    assert!(links.contains(&"Email: me@example.com".to_string()));
}

#[test]
fn discovery_order_is_preserved_across_strategies() {
    let html = concat!(
        r#"<span class="SpanLink">first.example</span>"#,
        r#"{"shareUrl":"https://second.example"}"#
    );
    let links = harvest_social_links(html, "IG: @third");
    assert_eq!(links.len(), 3);
    assert!(links[0].contains("first.example"));
    assert!(links[1].contains("second.example"));
    assert_eq!(links[2], "Instagram: @third");
}

#[test]
fn substring_containment_can_over_suppress() {
    // Documented quirk: "a.com" is a substring of the accepted entry for
    // "insta.com", so the shorter, genuinely different link is discarded.
    let html = concat!(
        r#"<span class="SpanLink">insta.com</span>"#,
        r#"<span class="SpanLink">a.com</span>"#
    );
    let links = harvest_social_links(html, "");
    assert_eq!(links, vec!["Link: insta.com - insta.com".to_string()]);
}

#[test]
fn empty_inputs_yield_no_links() {
    assert!(harvest_social_links("", "").is_empty());
}
