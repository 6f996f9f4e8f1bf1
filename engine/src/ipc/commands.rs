//! Frontend commands.

use tracing::{info, warn};

use super::payloads::BriefValidationPayload;
use crate::core::brief::CreativeBrief;
use crate::core::library::ContentCatalog;
use crate::core::planner::{generate_checked, VideoPlan};

/// Returns every content table, for option lists and trend notes
pub fn get_content_catalog() -> ContentCatalog {
    ContentCatalog::builtin()
}

/// Runs the brief gate without generating
pub fn validate_brief(brief: CreativeBrief) -> BriefValidationPayload {
    BriefValidationPayload::from_brief(&brief)
}

/// Gates the brief, then generates the launch and retarget plans
pub fn generate_video_plans(brief: CreativeBrief) -> Result<Vec<VideoPlan>, String> {
    match generate_checked(&brief) {
        Ok(plans) => {
            info!(brand = %brief.brand, "Generated {} video plans", plans.len());
            Ok(plans)
        }
        Err(e) => {
            warn!("Rejected brief: {}", e);
            Err(e.to_ipc_error())
        }
    }
}
