//! Engagement-rate arithmetic.
//!
//! The two platforms deliberately use different formulas. Instagram exposes
//! per-post edge data, so its rate is built from a genuine average of recent
//! posts. TikTok's public page only carries lifetime aggregates (total likes,
//! total videos), so its "advanced" rate approximates a per-video average
//! from those aggregates. Do not unify them.

/// Floor of the mean of `counts`, or `None` when nothing was observed.
/// Accumulates in `u128` so absurd counts in a hostile body cannot
/// overflow the sum.
#[must_use]
pub fn average(counts: &[u64]) -> Option<u64> {
    if counts.is_empty() {
        return None;
    }
    let sum: u128 = counts.iter().map(|&c| u128::from(c)).sum();
    let mean = sum / counts.len() as u128;
    // The mean of u64 values always fits back into u64.
    Some(u64::try_from(mean).unwrap_or(u64::MAX))
}

/// Instagram engagement rate: `average_likes / followers * 100`, rounded to
/// one decimal place. Defined only when followers are known and at least one
/// like count was observed; otherwise 0.
#[must_use]
pub fn instagram_rate(followers: u64, average_likes: Option<u64>) -> f64 {
    match average_likes {
        Some(avg) if followers > 0 => round_to(avg as f64 / followers as f64 * 100.0, 1),
        _ => 0.0,
    }
}

/// Basic and advanced TikTok engagement rates, both rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiktokRates {
    /// `total_likes / followers * 100`.
    pub basic: f64,
    /// `(total_likes / video_count) / followers * 100`; falls back to the
    /// basic rate when the video count is unknown or zero.
    pub advanced: f64,
}

/// Computes both TikTok rates from the page's lifetime aggregates.
/// With zero followers both rates are 0.
#[must_use]
pub fn tiktok_rates(total_likes: u64, video_count: u64, followers: u64) -> TiktokRates {
    if followers == 0 {
        return TiktokRates {
            basic: 0.0,
            advanced: 0.0,
        };
    }

    let basic = round_to(total_likes as f64 / followers as f64 * 100.0, 2);
    let advanced = if video_count > 0 {
        let avg_likes_per_video = total_likes as f64 / video_count as f64;
        round_to(avg_likes_per_video / followers as f64 * 100.0, 2)
    } else {
        basic
    };

    TiktokRates { basic, advanced }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_floored_mean() {
        assert_eq!(average(&[10, 20]), Some(15));
        assert_eq!(average(&[10, 20, 31]), Some(20)); // 61/3 floors to 20
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average(&[]), None);
    }

    #[test]
    fn average_survives_huge_counts() {
        assert_eq!(average(&[u64::MAX, u64::MAX]), Some(u64::MAX));
        assert_eq!(average(&[u64::MAX, 0]), Some(u64::MAX / 2));
    }

    #[test]
    fn instagram_rate_basic_case() {
        assert!((instagram_rate(1000, Some(50)) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn instagram_rate_rounds_to_one_decimal() {
        // 123 / 7000 * 100 = 1.7571... -> 1.8
        assert!((instagram_rate(7000, Some(123)) - 1.8).abs() < f64::EPSILON);
    }

    #[test]
    fn instagram_rate_zero_followers_is_zero() {
        assert!((instagram_rate(0, Some(50)) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn instagram_rate_unknown_likes_is_zero() {
        assert!((instagram_rate(1000, None) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiktok_rates_basic_and_advanced() {
        let rates = tiktok_rates(200, 10, 1000);
        assert!((rates.basic - 20.0).abs() < f64::EPSILON);
        // (200/10)/1000*100 = 2.0
        assert!((rates.advanced - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiktok_advanced_falls_back_to_basic_without_videos() {
        let rates = tiktok_rates(200, 0, 1000);
        assert!((rates.basic - 20.0).abs() < f64::EPSILON);
        assert!((rates.advanced - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiktok_rates_zero_followers() {
        let rates = tiktok_rates(200, 10, 0);
        assert!((rates.basic - 0.0).abs() < f64::EPSILON);
        assert!((rates.advanced - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiktok_rates_round_to_two_decimals() {
        // 333/7000*100 = 4.7571... -> 4.76
        let rates = tiktok_rates(333, 0, 7000);
        assert!((rates.basic - 4.76).abs() < f64::EPSILON);
    }
}
