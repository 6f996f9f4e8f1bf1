//! Deterministic seeding and selection.
//!
//! Seeds are derived from brief text lengths only. Selection maps a seed to a
//! table index with `floor(seed * n) mod n`; there is no entropy source, so a
//! brief always yields the same storyboard.

use crate::core::brief::{text_len, CreativeBrief};
use crate::core::Seed;

/// Offset between the two video seeds
pub const VIDEO_SEED_STEP: f64 = 13.7;
/// Offset between the two clip seeds of a video
pub const CLIP_SEED_STEP: f64 = 4.2;
/// Added to a clip seed when picking its call to action
pub const CTA_OFFSET: f64 = 2.3;
/// Added to a clip seed when picking its vibe note
pub const VIBE_OFFSET: f64 = 4.7;
/// Added to a video seed when picking its soundtrack
pub const SOUNDTRACK_OFFSET: f64 = 11.1;

/// Baseline seed for a brief:
/// `len(brand) + len(product)*1.7 + len(audience)*1.2 + len(differentiator)*0.6`
pub fn baseline_seed(brief: &CreativeBrief) -> Seed {
    text_len(&brief.brand) as f64
        + text_len(&brief.product) as f64 * 1.7
        + text_len(&brief.audience) as f64 * 1.2
        + text_len(&brief.differentiator) as f64 * 0.6
}

/// Seed for the video at `video_index`
pub fn video_seed(baseline: Seed, video_index: usize) -> Seed {
    baseline + video_index as f64 * VIDEO_SEED_STEP
}

/// Seed for the clip at `clip_index` within a video
pub fn clip_seed(video_seed: Seed, clip_index: usize) -> Seed {
    video_seed + clip_index as f64 * CLIP_SEED_STEP
}

/// Index picked for a table of `len` entries. Panics if `len` is zero.
pub fn pick_index(len: usize, seed: Seed) -> usize {
    assert!(len > 0, "cannot pick from an empty table");
    let n = len as f64;
    (seed * n).floor().rem_euclid(n) as usize
}

/// Picks an entry of `values` for `seed`.
///
/// Despite being the source of "variety", this is a pure function: identical
/// seeds pick identical entries.
pub fn pick<T>(values: &[T], seed: Seed) -> &T {
    &values[pick_index(values.len(), seed)]
}
