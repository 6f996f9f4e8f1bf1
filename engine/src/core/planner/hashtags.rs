//! Hashtag assembly.

use crate::core::brief::CreativeBrief;

/// Tags every storyboard carries after the brand tag
pub const STOCK_TAGS: [&str; 4] = ["#TikTokMadeMeBuyIt", "#UGCStory", "#Sora", "#AIStoryboards"];

/// Maximum length of the trend tag body (without `#`)
pub const TREND_TAG_MAX_LEN: usize = 14;

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `#` + brand with all whitespace removed
pub fn brand_tag(brand: &str) -> String {
    format!("#{}", strip_whitespace(brand))
}

/// `#` + tone with all whitespace removed
pub fn tone_tag(tone: &str) -> String {
    format!("#{}", strip_whitespace(tone))
}

/// `#` + first word of the trend, ASCII alphanumerics only, capped at 14 chars
pub fn trend_tag(trend: &str) -> String {
    let first_word = trend.split(' ').next().unwrap_or_default();
    let body: String = first_word
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(TREND_TAG_MAX_LEN)
        .collect();
    format!("#{body}")
}

/// Builds the deduplicated hashtag list for a brief.
///
/// Order: brand, stock tags, trend, tone; later duplicates are dropped.
pub fn build_hash_tags(brief: &CreativeBrief) -> Vec<String> {
    let candidates = std::iter::once(brand_tag(&brief.brand))
        .chain(STOCK_TAGS.iter().map(|t| t.to_string()))
        .chain([trend_tag(&brief.trend), tone_tag(&brief.tone)]);

    let mut tags: Vec<String> = Vec::new();
    for tag in candidates {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
