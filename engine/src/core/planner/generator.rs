//! Plan Generator
//!
//! Pure mapping from a creative brief to two video plans. No validation
//! happens here; callers gate the brief first (see [`generate_checked`]).

use tracing::debug;

use super::copy::fill_hook;
use super::hashtags::build_hash_tags;
use super::models::{ClipBeat, VideoPlan};
use super::seed::{
    baseline_seed, clip_seed, pick, pick_index, video_seed, CTA_OFFSET, SOUNDTRACK_OFFSET,
    VIBE_OFFSET,
};
use crate::core::brief::CreativeBrief;
use crate::core::library::{
    TrendArchetype, CTA_LIBRARY, HOOK_PATTERNS, SOUNDTRACKS, VIBE_NOTES,
};
use crate::core::{
    BeatKind, CoreResult, Seed, VideoRole, BEATS_PER_VIDEO, VIDEOS_PER_BRIEF,
};

/// Shot direction of every payoff beat
pub const PAYOFF_SHOT_IDEA: &str = "Switch to punch-in reaction shot and dynamic captions";

/// Generates the launch and retarget plans for a brief, in that order.
///
/// The brief must already satisfy the minimum-length gate.
pub fn generate(brief: &CreativeBrief) -> Vec<VideoPlan> {
    let baseline = baseline_seed(brief);
    let trend = brief.active_trend();
    let hash_tags = build_hash_tags(brief);

    debug!(baseline, trend = trend.label, "Generating storyboards");

    (0..VIDEOS_PER_BRIEF)
        .map(|video_index| build_video(brief, trend, &hash_tags, baseline, video_index))
        .collect()
}

/// Applies the brief gate, then generates.
pub fn generate_checked(brief: &CreativeBrief) -> CoreResult<Vec<VideoPlan>> {
    brief.validate()?;
    Ok(generate(brief))
}

fn build_video(
    brief: &CreativeBrief,
    trend: &TrendArchetype,
    hash_tags: &[String],
    baseline: Seed,
    video_index: usize,
) -> VideoPlan {
    let role = VideoRole::from_index(video_index);
    let seed = video_seed(baseline, video_index);

    let template = pick(&HOOK_PATTERNS, seed);
    let hero_message = fill_hook(template, brief);

    debug!(
        video_index,
        seed,
        hook_index = pick_index(HOOK_PATTERNS.len(), seed),
        "Picked hook template"
    );

    let clips = (0..BEATS_PER_VIDEO)
        .map(|clip_index| build_clip(brief, trend, &hero_message, seed, clip_index))
        .collect();

    let soundtrack = pick(&SOUNDTRACKS, seed + SOUNDTRACK_OFFSET).to_string();
    let trend_word = brief.trend.split(' ').next().unwrap_or_default();

    VideoPlan {
        title: format!("{} x {} {}", brief.brand, trend_word, role.title_suffix()),
        narrative: format!(
            "{} storytelling that leans on {} energy.",
            brief.tone,
            trend.label.to_lowercase()
        ),
        hero_message,
        anchor_emotion: role.anchor_emotion().to_string(),
        clips,
        soundtrack,
        hash_tags: hash_tags.to_vec(),
    }
}

fn build_clip(
    brief: &CreativeBrief,
    trend: &TrendArchetype,
    hero_message: &str,
    video_seed: Seed,
    clip_index: usize,
) -> ClipBeat {
    let seed = clip_seed(video_seed, clip_index);
    let cta = pick(&CTA_LIBRARY, seed + CTA_OFFSET).to_string();
    let vibe_notes = pick(&VIBE_NOTES, seed + VIBE_OFFSET).to_string();
    let beat = BeatKind::from_index(clip_index);

    debug!(
        clip_index,
        seed,
        cta_index = pick_index(CTA_LIBRARY.len(), seed + CTA_OFFSET),
        vibe_index = pick_index(VIBE_NOTES.len(), seed + VIBE_OFFSET),
        "Picked clip copy"
    );

    let (hook, shot_idea) = match beat {
        BeatKind::Hook => (
            hero_message.to_string(),
            format!("Open with {}", trend.storyboard_hint.to_lowercase()),
        ),
        BeatKind::Payoff => {
            let offer = if brief.has_offer() {
                format!("Offer: {}. ", brief.offer)
            } else {
                String::new()
            };
            (
                format!("Proof point: {}. {}{}", brief.differentiator, offer, cta),
                PAYOFF_SHOT_IDEA.to_string(),
            )
        }
    };

    ClipBeat {
        beat: beat.label().to_string(),
        hook,
        shot_idea,
        cta,
        vibe_notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::planner::copy::has_unfilled_token;
    use crate::core::CoreError;

    fn neon_fuel() -> CreativeBrief {
        CreativeBrief::new(
            "NeonFuel",
            "Energy Shot",
            "clinically backed stamina boost",
            "busy creators",
        )
        .with_tone("Bold & punchy")
        .with_trend("Hyper-fast 'before & after'")
    }

    #[test]
    fn produces_two_plans_of_two_clips() {
        let plans = generate(&neon_fuel());
        assert_eq!(plans.len(), 2);
        for plan in &plans {
            assert_eq!(plan.clips.len(), 2);
            assert_eq!(plan.clips[0].beat, "Hook (0-15s)");
            assert_eq!(plan.clips[1].beat, "Payoff + CTA (15-30s)");
            assert_eq!(plan.total_duration_sec(), 30.0);
        }
    }

    #[test]
    fn repeated_generation_is_identical() {
        let brief = neon_fuel();
        assert_eq!(generate(&brief), generate(&brief));
        assert_eq!(
            serde_json::to_string(&generate(&brief)).unwrap(),
            serde_json::to_string(&generate(&brief.clone())).unwrap()
        );
    }

    #[test]
    fn neon_fuel_launch_plan() {
        let plans = generate(&neon_fuel());
        let launch = &plans[0];

        assert_eq!(launch.title, "NeonFuel x Hyper-fast Launch");
        assert_eq!(
            launch.narrative,
            "Bold & punchy storytelling that leans on hyper-fast 'before & after' energy."
        );
        assert_eq!(launch.anchor_emotion, "Awe & intrigue");
        assert_eq!(
            launch.hero_message,
            "If you have busy creators, this goes crazy"
        );
        assert_eq!(launch.clips[0].hook, launch.hero_message);
        assert_eq!(
            launch.clips[0].shot_idea,
            "Open with lean on split screens and bold captions"
        );
        assert_eq!(launch.clips[0].cta, CTA_LIBRARY[1]);
        assert_eq!(launch.clips[0].vibe_notes, VIBE_NOTES[3]);
        assert_eq!(launch.clips[1].cta, CTA_LIBRARY[2]);
        assert_eq!(launch.clips[1].vibe_notes, VIBE_NOTES[4]);
        assert_eq!(launch.clips[1].shot_idea, PAYOFF_SHOT_IDEA);
        assert_eq!(
            launch.clips[1].hook,
            "Proof point: clinically backed stamina boost. Save this so you don't miss the restock"
        );
        assert_eq!(launch.soundtrack, SOUNDTRACKS[4]);
    }

    #[test]
    fn neon_fuel_retarget_plan() {
        let plans = generate(&neon_fuel());
        let retarget = &plans[1];

        assert_eq!(retarget.title, "NeonFuel x Hyper-fast Retarget");
        assert_eq!(retarget.anchor_emotion, "Trust & urgency");
        assert_eq!(
            retarget.hero_message,
            "POV: you're tired of clinically backed stamina boost... until now"
        );
        assert_eq!(retarget.clips[0].cta, CTA_LIBRARY[5]);
        assert_eq!(retarget.clips[0].vibe_notes, VIBE_NOTES[1]);
        assert_eq!(retarget.clips[1].cta, CTA_LIBRARY[0]);
        assert_eq!(retarget.clips[1].vibe_notes, VIBE_NOTES[3]);
        assert_eq!(retarget.soundtrack, SOUNDTRACKS[3]);
    }

    #[test]
    fn empty_offer_is_omitted_from_payoff() {
        for plan in generate(&neon_fuel()) {
            assert!(!plan.clips[1].hook.contains("Offer:"));
        }
    }

    #[test]
    fn offer_is_quoted_in_every_payoff() {
        let brief = neon_fuel().with_offer("48h code ENERGY20");
        for plan in generate(&brief) {
            let payoff = &plan.clips[1];
            assert!(payoff.hook.contains("Offer: 48h code ENERGY20."));
            assert!(payoff.hook.ends_with(&payoff.cta));
        }
    }

    #[test]
    fn hashtags_are_shared_and_unique() {
        let plans = generate(&neon_fuel());
        assert_eq!(plans[0].hash_tags, plans[1].hash_tags);
        let tags = &plans[0].hash_tags;
        assert!(tags.contains(&"#NeonFuel".to_string()));
        assert!(tags.contains(&"#TikTokMadeMeBuyIt".to_string()));
        assert!(tags.contains(&"#Bold&punchy".to_string()));
        let mut deduped = tags.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tags.len());
    }

    #[test]
    fn unknown_trend_uses_first_archetype_hint() {
        let brief = neon_fuel().with_trend("Nonexistent dance");
        let plans = generate(&brief);
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].title, "NeonFuel x Nonexistent Launch");
        assert_eq!(
            plans[0].clips[0].shot_idea,
            "Open with lean on split screens and bold captions"
        );
        assert!(plans[0]
            .narrative
            .contains("hyper-fast 'before & after' energy"));
        assert!(plans[0].hash_tags.contains(&"#Nonexistent".to_string()));
    }

    #[test]
    fn selected_trend_drives_shot_idea() {
        let brief = neon_fuel().with_trend("Micro-vlog day-in-the-life");
        let plans = generate(&brief);
        assert_eq!(
            plans[1].clips[0].shot_idea,
            "Open with overlay timestamp captions, minimal voiceover"
        );
        assert_eq!(plans[1].title, "NeonFuel x Micro-vlog Retarget");
    }

    #[test]
    fn hero_messages_never_contain_placeholders() {
        let audiences = ["ab.", "Busy creators.", "night owls who code", "x y z w v"];
        let differentiators = ["abc", "one two three four five six seven", "zero crash"];
        for audience in audiences {
            for differentiator in differentiators {
                for brand in ["Ab", "NeonFuel Energy", "Glow Labs Intl"] {
                    let brief = CreativeBrief::new(brand, "Serum", differentiator, audience);
                    for plan in generate(&brief) {
                        assert!(!has_unfilled_token(&plan.hero_message), "{}", plan.hero_message);
                    }
                }
            }
        }
    }

    #[test]
    fn minimal_brief_selects_expected_entries() {
        let brief = CreativeBrief::new("Ab", "Cd", "efg", "hij");
        let plans = generate(&brief);
        assert_eq!(
            plans[0].hero_message,
            "TikTok made me do it, but here's the twist"
        );
        assert_eq!(plans[0].clips[0].cta, CTA_LIBRARY[0]);
        assert_eq!(plans[0].clips[1].cta, CTA_LIBRARY[1]);
        assert_eq!(plans[1].clips[0].cta, CTA_LIBRARY[4]);
        assert_eq!(plans[1].clips[1].vibe_notes, VIBE_NOTES[2]);
    }

    #[test]
    fn generate_checked_rejects_incomplete_brief() {
        let brief = CreativeBrief::new("NeonFuel", "Energy Shot", "ok", "busy creators");
        assert!(matches!(
            generate_checked(&brief),
            Err(CoreError::BriefIncomplete { .. })
        ));
        assert_eq!(generate_checked(&neon_fuel()).unwrap().len(), 2);
    }
}
