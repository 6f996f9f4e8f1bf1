//! Storyboard output models.

use serde::{Deserialize, Serialize};
use specta::Type;

use crate::core::{TimeSec, BEAT_DURATION_SEC};

/// One timed narrative beat of a video plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct ClipBeat {
    /// "Hook (0-15s)" or "Payoff + CTA (15-30s)"
    pub beat: String,
    /// On-screen headline / spoken copy
    pub hook: String,
    /// Shot direction
    pub shot_idea: String,
    /// Call to action
    pub cta: String,
    /// Style-consistency note
    pub vibe_notes: String,
}

impl ClipBeat {
    pub fn duration_sec(&self) -> TimeSec {
        BEAT_DURATION_SEC
    }
}

/// A 30s short-form video plan made of two beats
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlan {
    pub title: String,
    pub narrative: String,
    /// Headline; identical to the first clip's hook
    pub hero_message: String,
    pub anchor_emotion: String,
    pub clips: Vec<ClipBeat>,
    /// Soundtrack cue
    pub soundtrack: String,
    /// Deduplicated, ordered
    pub hash_tags: Vec<String>,
}

impl VideoPlan {
    /// Sum of the beat durations
    pub fn total_duration_sec(&self) -> TimeSec {
        self.clips.iter().map(ClipBeat::duration_sec).sum()
    }
}
