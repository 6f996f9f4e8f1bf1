//! ReelPlan Core Library
//!
//! Deterministic storyboard engine for short-form UGC marketing videos.
//! A creative brief goes in, two 30s video plans (each split into a 15s hook
//! beat and a 15s payoff beat) come out.
//!
//! ## TypeScript Bindings
//!
//! All frontend-facing payloads derive `specta::Type` so a UI shell can export
//! them to TypeScript alongside its command wrappers.

pub mod core;
pub mod ipc;

use std::path::Path;
use std::sync::OnceLock;

// =============================================================================
// Logging
// =============================================================================

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static LOG_INIT: OnceLock<()> = OnceLock::new();

/// Initializes the global tracing subscriber.
///
/// Logs go to stderr; when `log_dir` is given, a daily rolling file
/// (`reelplan.log`) is added. `RUST_LOG` overrides the default level.
/// Calling this more than once is a no-op.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) {
    if LOG_INIT.set(()).is_err() {
        return;
    }

    use tracing_subscriber::prelude::*;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(cfg!(debug_assertions));

    let file_layer = log_dir.and_then(|dir| {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Failed to create log directory {}: {}", dir.display(), e);
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(dir, "reelplan.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = LOG_GUARD.set(guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
    });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer);

    // Avoid panics if a subscriber is already installed (tests, embedding apps).
    let _ = tracing::subscriber::set_global_default(subscriber);
}
