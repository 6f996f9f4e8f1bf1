//! IPC (Inter-Process Communication) Module
//!
//! Transport-agnostic command surface for UI shells. Every function here
//! takes and returns plain serializable payloads; errors are rendered as
//! strings the frontend can show as-is.

mod commands;
pub mod dto;
mod payloads;

pub use commands::*;
pub use payloads::*;
