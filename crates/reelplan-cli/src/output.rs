//! Terminal and JSON rendering of storyboards.

use std::fmt::Write;

use serde::Serialize;

use reelplan_core::engine::core::library::TREND_LIBRARY;
use reelplan_core::engine::core::BeatKind;
use reelplan_core::{CreativeBrief, VideoPlan};

/// JSON document emitted by `generate --format json`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlansDocument<'a> {
    pub brief: &'a CreativeBrief,
    pub plans: &'a [VideoPlan],
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Human-readable storyboard sheet
pub fn render_plans(brief: &CreativeBrief, plans: &[VideoPlan]) -> String {
    let mut out = String::new();

    for (index, plan) in plans.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "Video {}", index + 1);
        let _ = writeln!(out, "{}", plan.title);
        let _ = writeln!(
            out,
            "{}s total · {} x {}s clips",
            plan.total_duration_sec(),
            plan.clips.len(),
            plan.clips.first().map(|c| c.duration_sec()).unwrap_or_default()
        );
        let _ = writeln!(out, "  Narrative: {}", plan.narrative);
        let _ = writeln!(out, "  Hero message: {}", plan.hero_message);
        let _ = writeln!(out, "  Emotion anchor: {}", plan.anchor_emotion);
        if brief.has_platform_handle() {
            let _ = writeln!(out, "  On-screen tag: {}", brief.platform_handle);
        }
        let _ = writeln!(out, "  Soundtrack cue: {}", plan.soundtrack);
        let _ = writeln!(out, "  Hashtags: {}", plan.hash_tags.join(" · "));
        if brief.has_offer() {
            let _ = writeln!(out, "  Offer reminder: {}", brief.offer);
        }

        for (clip_index, clip) in plan.clips.iter().enumerate() {
            let start = BeatKind::from_index(clip_index).start_sec();
            let _ = writeln!(
                out,
                "  [{}] {}s-{}s",
                clip.beat,
                start,
                start + clip.duration_sec()
            );
            let _ = writeln!(out, "    {}", clip.hook);
            let _ = writeln!(out, "    Shot idea: {}", clip.shot_idea);
            let _ = writeln!(out, "    CTA: {}", clip.cta);
            let _ = writeln!(out, "    Consistency cue: {}", clip.vibe_notes);
        }
    }

    out
}

/// Trend archetypes with their hints
pub fn render_trends() -> String {
    let mut out = String::new();
    for trend in &TREND_LIBRARY {
        let _ = writeln!(out, "{}\n    {}", trend.label, trend.storyboard_hint);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelplan_core::engine::core::planner::generate;

    fn brief() -> CreativeBrief {
        CreativeBrief::new(
            "NeonFuel",
            "Energy Shot",
            "clinically backed stamina boost",
            "busy creators",
        )
    }

    #[test]
    fn renders_both_videos_and_all_beats() {
        let brief = brief();
        let text = render_plans(&brief, &generate(&brief));
        assert!(text.contains("Video 1\nNeonFuel x Hyper-fast Launch"));
        assert!(text.contains("Video 2\nNeonFuel x Hyper-fast Retarget"));
        assert!(text.contains("30s total · 2 x 15s clips"));
        assert_eq!(text.matches("[Hook (0-15s)]").count(), 2);
        assert_eq!(text.matches("[Payoff + CTA (15-30s)]").count(), 2);
        assert_eq!(text.matches("[Hook (0-15s)] 0s-15s").count(), 2);
        assert_eq!(text.matches("[Payoff + CTA (15-30s)] 15s-30s").count(), 2);
        assert!(text.contains("Hashtags: #NeonFuel · #TikTokMadeMeBuyIt"));
    }

    #[test]
    fn optional_lines_follow_brief() {
        let plain = brief();
        let text = render_plans(&plain, &generate(&plain));
        assert!(!text.contains("On-screen tag"));
        assert!(!text.contains("Offer reminder"));

        let full = brief()
            .with_offer("48h code ENERGY20")
            .with_platform_handle("@neonfuelenergy");
        let text = render_plans(&full, &generate(&full));
        assert!(text.contains("On-screen tag: @neonfuelenergy"));
        assert!(text.contains("Offer reminder: 48h code ENERGY20"));
    }

    #[test]
    fn json_document_contains_brief_and_plans() {
        let brief = brief();
        let plans = generate(&brief);
        let json = to_json(&PlansDocument { brief: &brief, plans: &plans }, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["brief"]["brand"], "NeonFuel");
        assert_eq!(value["plans"].as_array().unwrap().len(), 2);
        assert_eq!(value["plans"][0]["anchorEmotion"], "Awe & intrigue");
    }

    #[test]
    fn trends_listing_has_every_label() {
        let text = render_trends();
        for trend in &TREND_LIBRARY {
            assert!(text.contains(trend.label));
        }
    }
}
