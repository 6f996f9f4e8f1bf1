//! Content Libraries
//!
//! Fixed, ordered tables the plan generator indexes into. Order is
//! significant: selection is positional, so reordering or editing an entry
//! changes every generated storyboard.
//!
//! - Trend archetypes (label + storyboard hint)
//! - Hook templates with `{placeholder}` tokens
//! - Call-to-action lines
//! - Soundtrack cues
//! - Visual consistency notes

use serde::{Deserialize, Serialize};
use specta::Type;

// =============================================================================
// Trend Archetypes
// =============================================================================

/// A named stylistic pattern with its visual-direction hint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendArchetype {
    /// Unique label, matched exactly against the brief's trend
    pub label: &'static str,
    /// Display copy, also embedded in the hook beat's shot direction
    pub storyboard_hint: &'static str,
}

impl TrendArchetype {
    /// Returns true if `label` names an entry of the trend library
    pub fn is_known(label: &str) -> bool {
        TREND_LIBRARY.iter().any(|t| t.label == label)
    }
}

pub static TREND_LIBRARY: [TrendArchetype; 6] = [
    TrendArchetype {
        label: "Hyper-fast 'before & after'",
        storyboard_hint: "Lean on split screens and bold captions",
    },
    TrendArchetype {
        label: "POV confession cam",
        storyboard_hint: "Selfie framing with quick jump cuts",
    },
    TrendArchetype {
        label: "Unexpected duet reaction",
        storyboard_hint: "Pair with reaction-style B-roll layered over CTA",
    },
    TrendArchetype {
        label: "Aesthetic restock remix",
        storyboard_hint: "Satisfying ASMR restock shots, crisp audio",
    },
    TrendArchetype {
        label: "Micro-vlog day-in-the-life",
        storyboard_hint: "Overlay timestamp captions, minimal voiceover",
    },
    TrendArchetype {
        label: "Flash trend explainer",
        storyboard_hint: "Punchy captions + kinetic typography",
    },
];

/// Resolves a trend label, falling back to the first archetype when unknown
pub fn find_trend(label: &str) -> &'static TrendArchetype {
    TREND_LIBRARY
        .iter()
        .find(|t| t.label == label)
        .unwrap_or(&TREND_LIBRARY[0])
}

/// Trend labels in library order
pub fn trend_labels() -> impl Iterator<Item = &'static str> {
    TREND_LIBRARY.iter().map(|t| t.label)
}

// =============================================================================
// Copy Tables
// =============================================================================

/// Hook templates. Tokens: `{product}`, `{audienceMission}`,
/// `{productCategory}`, `{painPoint}`, `{audienceTrait}`.
pub static HOOK_PATTERNS: [&str; 6] = [
    "I tried {product} so you don't have to",
    "Stop scrolling if you care about {audienceMission}",
    "This {productCategory} hack actually works",
    "POV: you're tired of {painPoint}... until now",
    "TikTok made me do it, but here's the twist",
    "If you have {audienceTrait}, this goes crazy",
];

pub static CTA_LIBRARY: [&str; 6] = [
    "Tap the link to lock in the drop",
    "Comment 'ME' and I'll DM the code",
    "Save this so you don't miss the restock",
    "Hit follow for part 2 with raw BTS",
    "Live in bio — snag yours before midnight",
    "Duet this when you try it",
];

pub static SOUNDTRACKS: [&str; 5] = [
    "Warm pluggnb 140bpm beat for bouncey pacing",
    "Ambient jersey club flip of a nostalgic hook",
    "Trending sped-up R&B loop with crisp hi hats",
    "Synthy hyperpop that peaks at 15s for the CTA",
    "Glitchy trap instrumental with beat drop at 7s",
];

/// Style-consistency notes attached to each clip beat
pub static VIBE_NOTES: [&str; 6] = [
    "Overlay animated captions in brand palette",
    "Use match cuts timed to the beat drop",
    "Anchor each frame with the brand icon bottom-left",
    "Blend AI-generated Sora footage with IRL B-roll",
    "End each clip with a consistent emoji sticker",
    "Leverage micro zooms to punch lines",
];

// =============================================================================
// Catalog Snapshot
// =============================================================================

/// Owned trend entry for frontends
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct TrendOption {
    pub label: String,
    pub storyboard_hint: String,
}

/// Serializable copy of every content table, in library order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    pub trends: Vec<TrendOption>,
    pub hook_patterns: Vec<String>,
    pub cta_lines: Vec<String>,
    pub soundtracks: Vec<String>,
    pub vibe_notes: Vec<String>,
}

impl ContentCatalog {
    /// Snapshots the built-in libraries
    pub fn builtin() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            trends: TREND_LIBRARY
                .iter()
                .map(|t| TrendOption {
                    label: t.label.to_string(),
                    storyboard_hint: t.storyboard_hint.to_string(),
                })
                .collect(),
            hook_patterns: owned(&HOOK_PATTERNS),
            cta_lines: owned(&CTA_LIBRARY),
            soundtracks: owned(&SOUNDTRACKS),
            vibe_notes: owned(&VIBE_NOTES),
        }
    }
}
