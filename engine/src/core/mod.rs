//! ReelPlan Core Engine
//!
//! Brief model, content libraries, plan generation, and settings.

pub mod brief;
pub mod fs;
pub mod library;
pub mod planner;
pub mod settings;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
