//! Settings Persistence System
//!
//! Provides persistent application settings with:
//! - Atomic file writes (temp file + rename)
//! - Schema validation with defaults
//! - Migration support for schema changes
//!
//! Storage location: {config_dir}/reelplan/settings.json

use std::fs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use specta::Type;
use tracing::{info, warn};

use crate::core::brief::{CreativeBrief, DEFAULT_TONE};
use crate::core::fs::atomic_write_json_pretty;
use crate::core::library::{TrendArchetype, TREND_LIBRARY};
use crate::core::{CoreError, CoreResult};

/// Settings schema version for migration support
pub const SETTINGS_VERSION: u32 = 1;

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Lock file name (advisory lock to prevent concurrent writers)
pub const SETTINGS_LOCK_FILE: &str = "settings.json.lock";

/// Delay before freshly generated plans are shown (loading state)
pub const DEFAULT_RENDER_DELAY_MS: u64 = 320;

/// Upper bound for the artificial render delay
pub const MAX_RENDER_DELAY_MS: u64 = 5_000;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Type)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Generation settings
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            generation: GenerationSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl AppSettings {
    /// Normalizes settings so persisted state is always valid.
    ///
    /// Bad values are corrected instead of rejected, so a damaged file never
    /// blocks generation.
    pub fn normalize(&mut self) {
        self.version = SETTINGS_VERSION;

        self.generation.render_delay_ms = self.generation.render_delay_ms.min(MAX_RENDER_DELAY_MS);
        if self.generation.default_tone.trim().is_empty() {
            self.generation.default_tone = default_tone();
        }
        if !TrendArchetype::is_known(&self.generation.default_trend) {
            self.generation.default_trend = default_trend();
        }

        self.output.format = normalize_enum(&self.output.format, &["text", "json"], default_format());
    }

    /// Blank brief pre-filled with the configured tone and trend
    pub fn default_brief(&self) -> CreativeBrief {
        CreativeBrief::default()
            .with_tone(self.generation.default_tone.clone())
            .with_trend(self.generation.default_trend.clone())
    }
}

fn normalize_enum(value: &str, allowed: &[&str], fallback: String) -> String {
    if allowed.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        value.to_ascii_lowercase()
    } else {
        fallback
    }
}

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Type)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    /// Artificial delay before plans are published, in milliseconds
    #[serde(default = "default_render_delay")]
    pub render_delay_ms: u64,

    /// Tone pre-filled into new briefs
    #[serde(default = "default_tone")]
    pub default_tone: String,

    /// Trend label pre-filled into new briefs
    #[serde(default = "default_trend")]
    pub default_trend: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            render_delay_ms: default_render_delay(),
            default_tone: default_tone(),
            default_trend: default_trend(),
        }
    }
}

fn default_render_delay() -> u64 {
    DEFAULT_RENDER_DELAY_MS
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_trend() -> String {
    TREND_LIBRARY[0].label.to_string()
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Type)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty_json: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

/// Platform config directory for ReelPlan (`.reelplan` if unknown)
pub fn default_settings_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("reelplan"))
        .unwrap_or_else(|| PathBuf::from(".reelplan"))
}

/// Settings manager for loading, saving, and resetting settings
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Create a new settings manager rooted at `settings_dir`
    pub fn new(settings_dir: PathBuf) -> Self {
        Self {
            settings_path: settings_dir.join(SETTINGS_FILE),
        }
    }

    fn lock_path(&self) -> PathBuf {
        self.settings_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(SETTINGS_LOCK_FILE)
    }

    fn with_lock<T>(&self, exclusive: bool, op: impl FnOnce() -> CoreResult<T>) -> CoreResult<T> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CoreError::SettingsError(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(|e| CoreError::SettingsError(format!("Failed to open lock file: {}", e)))?;

        let locked = if exclusive {
            fs2::FileExt::lock_exclusive(&lock_file)
        } else {
            fs2::FileExt::lock_shared(&lock_file)
        };
        locked.map_err(|e| CoreError::SettingsError(format!("Failed to lock settings: {}", e)))?;

        let result = op();

        if let Err(e) = fs2::FileExt::unlock(&lock_file) {
            warn!("Failed to unlock settings lock file: {}", e);
        }

        result
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from disk, returning defaults if the file is missing or unreadable
    pub fn load(&self) -> AppSettings {
        let result = self.with_lock(false, || {
            if !self.settings_path.exists() {
                info!("Settings file not found, using defaults");
                return Ok(AppSettings::default());
            }

            let content = fs::read_to_string(&self.settings_path)?;
            let mut settings = serde_json::from_str::<AppSettings>(&content)?;

            if settings.version < SETTINGS_VERSION {
                info!(
                    "Migrating settings from version {} to {}",
                    settings.version, SETTINGS_VERSION
                );
                settings = self.migrate(settings);
            }

            settings.normalize();
            Ok(settings)
        });

        match result {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings, using defaults: {}", e);
                AppSettings::default()
            }
        }
    }

    /// Save settings to disk (normalized, atomic)
    pub fn save(&self, settings: &AppSettings) -> CoreResult<AppSettings> {
        self.with_lock(true, || {
            let mut normalized = settings.clone();
            normalized.normalize();

            atomic_write_json_pretty(&self.settings_path, &normalized)?;

            info!("Settings saved to {:?}", self.settings_path);
            Ok(normalized)
        })
    }

    /// Reset settings to defaults and delete the settings file
    pub fn reset(&self) -> CoreResult<AppSettings> {
        self.with_lock(true, || {
            if self.settings_path.exists() {
                fs::remove_file(&self.settings_path)?;
                info!("Settings file deleted");
            }
            Ok(AppSettings::default())
        })
    }

    /// Brings an older settings file up to the current schema.
    ///
    /// Version 0 files share the version 1 layout, so only the version changes.
    fn migrate(&self, mut settings: AppSettings) -> AppSettings {
        settings.version = SETTINGS_VERSION;
        settings
    }
}
