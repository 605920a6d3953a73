//! File primitives shared by export and check.
//!
//! Output is pretty JSON with 2-space indentation and non-ASCII text kept
//! literal. Each file is written to a sibling `.tmp` file and renamed over
//! the target, so a reader never sees a half-written file.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;

/// Create `path` and all missing ancestors. No-op if it already exists.
///
/// # Errors
///
/// Returns `ExportError::CreateDir` on filesystem failure.
pub fn ensure_output_directory(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// The exact text [`export`] writes for `data`.
///
/// # Errors
///
/// Returns `ExportError::Encode` if `data` cannot be serialized.
pub fn render<T: Serialize + ?Sized>(name: &str, data: &T) -> Result<String, ExportError> {
    serde_json::to_string_pretty(data).map_err(|source| ExportError::Encode {
        name: name.to_string(),
        source,
    })
}

/// Serialize `data` and replace the file at `path` with it.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `ExportError::Encode` if serialization fails, or
/// `ExportError::Write` if the file cannot be written or renamed.
pub fn export<T: Serialize + ?Sized>(name: &str, data: &T, path: &Path) -> Result<u64, ExportError> {
    let text = render(name, data)?;
    write_atomic(path, text.as_bytes())?;
    Ok(text.len() as u64)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let temp = temp_path(path);
    write_then_rename(&temp, path, bytes).map_err(|source| {
        let _ = fs::remove_file(&temp);
        ExportError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_then_rename(temp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ensure_output_directory_creates_ancestors_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src").join("data");
        ensure_output_directory(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_output_directory_fails_when_a_file_is_in_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();
        let result = ensure_output_directory(&blocker.join("inner"));
        assert!(matches!(result, Err(ExportError::CreateDir { .. })));
    }

    #[test]
    fn export_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, "stale content that is longer than the new one").unwrap();

        let bytes = export("graph", &serde_json::json!({"nodes": []}), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"nodes\": []\n}");
        assert_eq!(bytes, written.len() as u64);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn export_into_missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("graph.json");
        let result = export("graph", &serde_json::json!({}), &path);
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }

    #[test]
    fn render_keeps_emoji_literal() {
        let text = render("icons", &vec!["👶", "🎓"]).unwrap();
        assert_eq!(text, "[\n  \"👶\",\n  \"🎓\"\n]");
    }

    #[test]
    fn temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("out/lifeStages.json")),
            PathBuf::from("out/lifeStages.json.tmp")
        );
    }
}
