//! Session Event Broadcasting
//!
//! Events are published on a `tokio::sync::broadcast` channel so any number
//! of frontends (terminal renderer, webview bridge, tests) can follow the
//! session without the session knowing about them.

use serde::{Deserialize, Serialize};

use reelplan_lib::core::planner::VideoPlan;

/// Event names used for frontend communication
pub mod event_names {
    /// Generation accepted, loading state begins
    pub const GENERATION_STARTED: &str = "plans:generating";
    /// New plans are displayed
    pub const PLANS_UPDATED: &str = "plans:updated";
    /// A newer request replaced this one before it finished
    pub const GENERATION_SUPERSEDED: &str = "plans:superseded";
    /// Brief and plans cleared
    pub const SESSION_RESET: &str = "session:reset";
}

/// Capacity of the broadcast channel
pub const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Session state change
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    #[serde(rename_all = "camelCase")]
    GenerationStarted { ticket: u64 },
    #[serde(rename_all = "camelCase")]
    PlansUpdated { ticket: u64, plans: Vec<VideoPlan> },
    #[serde(rename_all = "camelCase")]
    GenerationSuperseded { ticket: u64 },
    SessionReset,
}

impl SessionEvent {
    /// Stable event name for string-keyed transports
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::GenerationStarted { .. } => event_names::GENERATION_STARTED,
            SessionEvent::PlansUpdated { .. } => event_names::PLANS_UPDATED,
            SessionEvent::GenerationSuperseded { .. } => event_names::GENERATION_SUPERSEDED,
            SessionEvent::SessionReset => event_names::SESSION_RESET,
        }
    }
}
