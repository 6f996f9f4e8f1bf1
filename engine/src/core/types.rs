//! ReelPlan Core Type Definitions
//!
//! Defines fundamental types used throughout the project.
//! All types are exported to TypeScript via specta.

use std::fmt;

use serde::{Deserialize, Serialize};
use specta::Type;

// =============================================================================
// Scalar Types
// =============================================================================

/// Deterministic selection seed derived from brief text lengths
pub type Seed = f64;

/// Time in seconds (floating point)
pub type TimeSec = f64;

/// Number of video plans produced per generation
pub const VIDEOS_PER_BRIEF: usize = 2;

/// Number of beats composing each video plan
pub const BEATS_PER_VIDEO: usize = 2;

/// Length of a single beat
pub const BEAT_DURATION_SEC: TimeSec = 15.0;

// =============================================================================
// Brief Fields
// =============================================================================

/// Named field of a creative brief
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub enum BriefField {
    Brand,
    Product,
    Differentiator,
    Audience,
    Tone,
    Trend,
    Offer,
    PlatformHandle,
}

impl BriefField {
    /// Fields that must clear a minimum length before generation
    pub const REQUIRED: [BriefField; 4] = [
        BriefField::Brand,
        BriefField::Product,
        BriefField::Audience,
        BriefField::Differentiator,
    ];

    /// Trimmed length the field must exceed, if any
    pub fn min_len(self) -> Option<usize> {
        match self {
            BriefField::Brand | BriefField::Product => Some(1),
            BriefField::Audience | BriefField::Differentiator => Some(2),
            _ => None,
        }
    }

    /// Stable wire name (matches the serde representation)
    pub fn as_str(self) -> &'static str {
        match self {
            BriefField::Brand => "brand",
            BriefField::Product => "product",
            BriefField::Differentiator => "differentiator",
            BriefField::Audience => "audience",
            BriefField::Tone => "tone",
            BriefField::Trend => "trend",
            BriefField::Offer => "offer",
            BriefField::PlatformHandle => "platformHandle",
        }
    }
}

impl fmt::Display for BriefField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Storyboard Positions
// =============================================================================

/// Timed narrative beat within a video plan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub enum BeatKind {
    /// 0-15s opener
    Hook,
    /// 15-30s proof and call to action
    Payoff,
}

impl BeatKind {
    /// Beat for a clip position (0 = hook, anything else = payoff)
    pub fn from_index(clip_index: usize) -> Self {
        if clip_index == 0 {
            BeatKind::Hook
        } else {
            BeatKind::Payoff
        }
    }

    /// Display label used as the beat name
    pub fn label(self) -> &'static str {
        match self {
            BeatKind::Hook => "Hook (0-15s)",
            BeatKind::Payoff => "Payoff + CTA (15-30s)",
        }
    }

    /// Offset of the beat inside its video
    pub fn start_sec(self) -> TimeSec {
        match self {
            BeatKind::Hook => 0.0,
            BeatKind::Payoff => BEAT_DURATION_SEC,
        }
    }
}

/// Role a video plays in the two-video campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub enum VideoRole {
    Launch,
    Retarget,
}

impl VideoRole {
    /// Role for a video position (0 = launch, anything else = retarget)
    pub fn from_index(video_index: usize) -> Self {
        if video_index == 0 {
            VideoRole::Launch
        } else {
            VideoRole::Retarget
        }
    }

    /// Suffix appended to the plan title
    pub fn title_suffix(self) -> &'static str {
        match self {
            VideoRole::Launch => "Launch",
            VideoRole::Retarget => "Retarget",
        }
    }

    /// Emotion the video is anchored on
    pub fn anchor_emotion(self) -> &'static str {
        match self {
            VideoRole::Launch => "Awe & intrigue",
            VideoRole::Retarget => "Trust & urgency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_have_minimums() {
        for field in BriefField::REQUIRED {
            assert!(field.min_len().is_some(), "{field} should be gated");
        }
        assert_eq!(BriefField::Tone.min_len(), None);
        assert_eq!(BriefField::Offer.min_len(), None);
    }

    #[test]
    fn brief_field_display_matches_wire_name() {
        let json = serde_json::to_string(&BriefField::PlatformHandle).unwrap();
        assert_eq!(json, "\"platformHandle\"");
        assert_eq!(BriefField::PlatformHandle.to_string(), "platformHandle");
    }

    #[test]
    fn beat_labels_and_offsets() {
        assert_eq!(BeatKind::from_index(0).label(), "Hook (0-15s)");
        assert_eq!(BeatKind::from_index(1).label(), "Payoff + CTA (15-30s)");
        assert_eq!(BeatKind::Payoff.start_sec(), 15.0);
    }

    #[test]
    fn video_roles_map_positions() {
        assert_eq!(VideoRole::from_index(0).anchor_emotion(), "Awe & intrigue");
        assert_eq!(VideoRole::from_index(1).anchor_emotion(), "Trust & urgency");
        assert_eq!(VideoRole::Retarget.title_suffix(), "Retarget");
    }
}
