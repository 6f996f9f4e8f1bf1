//! ReelPlan Error Definitions
//!
//! Defines error types used throughout the project.

use thiserror::Error;

use super::BriefField;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Brief Errors
    // =========================================================================
    #[error("Brief incomplete: {field} needs more than {min_len} characters")]
    BriefIncomplete { field: BriefField, min_len: usize },

    #[error("Invalid brief file: {0}")]
    InvalidBrief(String),

    // =========================================================================
    // Settings Errors
    // =========================================================================
    #[error("Settings error: {0}")]
    SettingsError(String),

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Convert to a user-friendly error message for IPC
    pub fn to_ipc_error(&self) -> String {
        self.to_string()
    }
}
