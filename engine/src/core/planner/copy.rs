//! Hook template filling.

use crate::core::brief::CreativeBrief;

pub const TOKEN_PRODUCT: &str = "{product}";
pub const TOKEN_AUDIENCE_MISSION: &str = "{audienceMission}";
pub const TOKEN_PRODUCT_CATEGORY: &str = "{productCategory}";
pub const TOKEN_PAIN_POINT: &str = "{painPoint}";
pub const TOKEN_AUDIENCE_TRAIT: &str = "{audienceTrait}";

/// Every placeholder a hook template may carry, in substitution order
pub const HOOK_TOKENS: [&str; 5] = [
    TOKEN_PRODUCT,
    TOKEN_AUDIENCE_MISSION,
    TOKEN_PRODUCT_CATEGORY,
    TOKEN_PAIN_POINT,
    TOKEN_AUDIENCE_TRAIT,
];

/// First `count` space-separated words of `text`, rejoined with single spaces
pub fn leading_words(text: &str, count: usize) -> String {
    text.split(' ').take(count).collect::<Vec<_>>().join(" ")
}

/// Audience phrased as a mission: leading word character lowercased, one
/// trailing period dropped.
pub fn audience_mission(audience: &str) -> String {
    let mut mission = String::with_capacity(audience.len());
    let mut chars = audience.chars();
    if let Some(first) = chars.next() {
        if first.is_ascii_alphanumeric() || first == '_' {
            mission.push(first.to_ascii_lowercase());
        } else {
            mission.push(first);
        }
        mission.extend(chars);
    }
    if mission.ends_with('.') {
        mission.pop();
    }
    mission
}

/// Pain point quoted in hooks: first six words of the differentiator
pub fn pain_point(differentiator: &str) -> String {
    leading_words(differentiator, 6)
}

/// Audience trait quoted in hooks: first three words of the audience
pub fn audience_trait(audience: &str) -> String {
    leading_words(audience, 3)
}

/// Substitutes the first occurrence of each token, in `HOOK_TOKENS` order.
///
/// Tokens missing from the template are skipped; text that is not a known
/// token is left untouched.
pub fn fill_hook(template: &str, brief: &CreativeBrief) -> String {
    let values = [
        brief.product.clone(),
        audience_mission(&brief.audience),
        brief.product.clone(),
        pain_point(&brief.differentiator),
        audience_trait(&brief.audience),
    ];

    HOOK_TOKENS
        .iter()
        .zip(values.iter())
        .fold(template.to_string(), |text, (token, value)| {
            text.replacen(token, value, 1)
        })
}

/// Returns true if any hook placeholder survives in `text`
pub fn has_unfilled_token(text: &str) -> bool {
    HOOK_TOKENS.iter().any(|token| text.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library::HOOK_PATTERNS;

    fn brief() -> CreativeBrief {
        CreativeBrief::new(
            "Glow",
            "Serum Stick",
            "melts into skin with zero residue at all times",
            "Skincare minimalists who hate ten-step routines.",
        )
    }

    #[test]
    fn leading_words_truncates_and_keeps_short_text() {
        assert_eq!(leading_words("one two three four", 3), "one two three");
        assert_eq!(leading_words("solo", 3), "solo");
        assert_eq!(leading_words("", 3), "");
    }

    #[test]
    fn audience_mission_lowercases_and_strips_period() {
        assert_eq!(
            audience_mission("Skincare minimalists who hate ten-step routines."),
            "skincare minimalists who hate ten-step routines"
        );
        assert_eq!(audience_mission("busy creators"), "busy creators");
        // Only one trailing period is removed.
        assert_eq!(audience_mission("Gamers.."), "gamers.");
        // Non-word leading characters are kept as-is.
        assert_eq!(audience_mission("Émigrés"), "Émigrés");
        assert_eq!(audience_mission(""), "");
    }

    #[test]
    fn pain_point_and_trait_take_fixed_word_counts() {
        let brief = brief();
        assert_eq!(
            pain_point(&brief.differentiator),
            "melts into skin with zero residue"
        );
        assert_eq!(
            audience_trait(&brief.audience),
            "Skincare minimalists who"
        );
    }

    #[test]
    fn fill_hook_substitutes_each_token() {
        let brief = brief();
        assert_eq!(
            fill_hook(HOOK_PATTERNS[0], &brief),
            "I tried Serum Stick so you don't have to"
        );
        assert_eq!(
            fill_hook(HOOK_PATTERNS[1], &brief),
            "Stop scrolling if you care about skincare minimalists who hate ten-step routines"
        );
        assert_eq!(
            fill_hook(HOOK_PATTERNS[2], &brief),
            "This Serum Stick hack actually works"
        );
        assert_eq!(
            fill_hook(HOOK_PATTERNS[3], &brief),
            "POV: you're tired of melts into skin with zero residue... until now"
        );
        assert_eq!(
            fill_hook(HOOK_PATTERNS[5], &brief),
            "If you have Skincare minimalists who, this goes crazy"
        );
    }

    #[test]
    fn no_builtin_template_leaves_a_token_behind() {
        let brief = brief();
        for template in HOOK_PATTERNS {
            assert!(!has_unfilled_token(&fill_hook(template, &brief)));
        }
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let brief = brief();
        assert_eq!(
            fill_hook("{product} vs {product}", &brief),
            "Serum Stick vs {product}"
        );
        assert_eq!(fill_hook("{unknown}", &brief), "{unknown}");
    }
}
