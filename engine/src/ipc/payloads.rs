use serde::{Deserialize, Serialize};
use specta::Type;

use crate::core::brief::{BriefIssue, CreativeBrief};

/// Result of running the brief gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct BriefValidationPayload {
    /// Whether the generate action should be enabled
    pub can_generate: bool,
    /// Required fields below their minimum length
    pub issues: Vec<BriefIssue>,
    /// Storyboard hint of the trend the brief resolves to ("trend notes")
    pub trend_hint: String,
}

impl BriefValidationPayload {
    pub fn from_brief(brief: &CreativeBrief) -> Self {
        let issues = brief.issues();
        Self {
            can_generate: issues.is_empty(),
            issues,
            trend_hint: brief.active_trend().storyboard_hint.to_string(),
        }
    }
}
