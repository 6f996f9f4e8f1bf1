//! Brief assembly from flags and brief files.

use thiserror::Error;

use reelplan_core::engine::core::fs::read_brief_file;
use reelplan_core::{BriefIssue, CoreError, CreativeBrief};

use crate::cli::BriefArgs;

#[derive(Error, Debug)]
pub enum BriefInputError {
    #[error("Could not load brief: {0}")]
    Load(#[from] CoreError),

    #[error("Brief is not ready to generate:\n{}", format_issues(.0))]
    Incomplete(Vec<BriefIssue>),
}

fn format_issues(issues: &[BriefIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            format!(
                "  - {} must be longer than {} characters (has {})",
                issue.field, issue.min_len, issue.actual_len
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the brief: `base` (settings defaults), then the brief file, then flags
pub fn resolve_brief(args: &BriefArgs, base: CreativeBrief) -> Result<CreativeBrief, BriefInputError> {
    let mut brief = match &args.brief_file {
        Some(path) => read_brief_file(path)?,
        None => base,
    };

    let overrides = [
        (&args.brand, &mut brief.brand),
        (&args.product, &mut brief.product),
        (&args.differentiator, &mut brief.differentiator),
        (&args.audience, &mut brief.audience),
        (&args.tone, &mut brief.tone),
        (&args.trend, &mut brief.trend),
        (&args.offer, &mut brief.offer),
        (&args.platform_handle, &mut brief.platform_handle),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.clone();
        }
    }

    Ok(brief)
}

/// Rejects briefs that fail the minimum-length gate
pub fn ensure_ready(brief: &CreativeBrief) -> Result<(), BriefInputError> {
    let issues = brief.issues();
    if issues.is_empty() {
        Ok(())
    } else {
        Err(BriefInputError::Incomplete(issues))
    }
}
