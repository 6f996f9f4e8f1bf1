//! Filesystem utilities.
//!
//! Crash-tolerant writes for settings, plus validated reads of brief files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::brief::CreativeBrief;
use crate::core::{CoreError, CoreResult};

// =============================================================================
// Input Paths
// =============================================================================

/// Validates a local input file path.
///
/// Rejects empty values, URLs and anything that is not an existing regular
/// file. Relative paths are allowed (resolved against the working directory).
pub fn validate_local_input_path(path: &str, label: &str) -> Result<PathBuf, String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is empty"));
    }

    if trimmed.contains("://") {
        return Err(format!("{label} must be a local file path, not a URL"));
    }

    let pb = PathBuf::from(trimmed);
    let meta =
        std::fs::metadata(&pb).map_err(|_| format!("{label} file not found: {}", pb.display()))?;
    if !meta.is_file() {
        return Err(format!("{label} is not a file: {}", pb.display()));
    }

    Ok(pb)
}

/// Reads a JSON brief file. Missing fields take brief defaults.
pub fn read_brief_file(path: &str) -> CoreResult<CreativeBrief> {
    let pb = validate_local_input_path(path, "briefPath").map_err(CoreError::InvalidBrief)?;
    let content = std::fs::read_to_string(&pb)?;
    CreativeBrief::from_json(&content)
}

// =============================================================================
// Atomic Writes
// =============================================================================

/// Write bytes to `path` using an atomic replace pattern.
///
/// Writes a sibling `.tmp` file, syncs it, then swaps it into place. An
/// existing destination is moved aside to `.bak` during the swap.
pub fn atomic_write_bytes(path: &Path, bytes: &[u8]) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = sibling_path(path, "tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    atomic_replace(path, &tmp_path)
}

/// Write a JSON file atomically with pretty formatting.
pub fn atomic_write_json_pretty<T: serde::Serialize>(path: &Path, value: &T) -> CoreResult<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    atomic_write_bytes(path, &bytes)
}

fn sibling_path(path: &Path, extension: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| extension.to_string());
    path.with_file_name(format!("{file_name}.{extension}"))
}

fn atomic_replace(dest: &Path, src_tmp: &Path) -> CoreResult<()> {
    if !dest.exists() {
        std::fs::rename(src_tmp, dest)?;
        return Ok(());
    }

    // Windows: rename-over-existing may fail depending on filesystem; use a backup swap.
    let bak = sibling_path(dest, "bak");
    if bak.exists() {
        let _ = std::fs::remove_file(&bak);
    }

    std::fs::rename(dest, &bak)?;
    match std::fs::rename(src_tmp, dest) {
        Ok(()) => {
            let _ = std::fs::remove_file(&bak);
            Ok(())
        }
        Err(e) => {
            let _ = std::fs::rename(&bak, dest);
            let _ = std::fs::remove_file(src_tmp);
            Err(CoreError::IoError(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_bytes_creates_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("plans.json");

        atomic_write_bytes(&path, b"one").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one");

        atomic_write_bytes(&path, b"two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
        assert!(!sibling_path(&path, "tmp").exists());
        assert!(!sibling_path(&path, "bak").exists());
    }

    #[test]
    fn validate_local_input_path_rejects_empty_and_urls() {
        assert!(validate_local_input_path("   ", "briefPath").is_err());
        let err = validate_local_input_path("https://example.com/brief.json", "briefPath")
            .unwrap_err();
        assert!(err.contains("not a URL"));
    }

    #[test]
    fn validate_local_input_path_rejects_directories() {
        let dir = TempDir::new().unwrap();
        let err = validate_local_input_path(dir.path().to_str().unwrap(), "briefPath")
            .unwrap_err();
        assert!(err.contains("not a file"));
    }

    #[test]
    fn read_brief_file_parses_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.json");
        std::fs::write(
            &path,
            r#"{"brand":"NeonFuel","product":"Energy Shot","differentiator":"zero crash energy","audience":"busy creators","offer":"48h code ENERGY20"}"#,
        )
        .unwrap();

        let brief = read_brief_file(path.to_str().unwrap()).unwrap();
        assert_eq!(brief.offer, "48h code ENERGY20");
        assert!(brief.can_generate());
    }

    #[test]
    fn read_brief_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            read_brief_file(path.to_str().unwrap()),
            Err(CoreError::InvalidBrief(_))
        ));
    }
}
