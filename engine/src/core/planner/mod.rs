//! Storyboard Planner
//!
//! Turns a creative brief into two short-form video plans.
//!
//! # Modules
//!
//! - `seed`: Length-derived seeds and deterministic table selection
//! - `copy`: Hook template filling
//! - `hashtags`: Hashtag assembly
//! - `models`: Output plan structures
//! - `generator`: Plan assembly

pub mod copy;
pub mod generator;
pub mod hashtags;
pub mod models;
pub mod seed;

// Re-export main types
pub use generator::{generate, generate_checked};
pub use models::{ClipBeat, VideoPlan};
