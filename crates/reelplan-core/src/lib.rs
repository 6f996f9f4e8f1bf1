//! ReelPlan Core
//!
//! Headless entry point to the storyboard engine. Re-exports the engine
//! library and adds [`PlanSession`], the presentation-side state holder that
//! owns the current brief, the displayed plans and the in-flight flag.

pub mod events;
pub mod session;

pub use reelplan_lib as engine;
pub use reelplan_lib::core::brief::{BriefIssue, CreativeBrief};
pub use reelplan_lib::core::planner::{ClipBeat, VideoPlan};
pub use reelplan_lib::core::settings::{AppSettings, SettingsManager};
pub use reelplan_lib::core::{CoreError, CoreResult};
pub use reelplan_lib::init_logging;

pub use events::{event_names, SessionEvent};
pub use session::{GenerationOutcome, PlanSession};
