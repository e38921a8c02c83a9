//! JSON writer for page templates.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Document;

/// Serialize a document to JSON.
///
/// Pretty output uses two-space indentation and ends with a newline;
/// compact output is a single line.
pub fn generate_json(document: &Document, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    json.push('\n');
    Ok(json)
}

/// Save a document as JSON to `path`.
///
/// Missing parent directories are created. The content is written to a
/// hidden temp file next to the target and renamed into place, so a failed
/// write never leaves a truncated file behind.
pub fn save_json(document: &Document, path: &Path, pretty: bool) -> Result<()> {
    let content = generate_json(document, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_file = temp_path(path);
    let written = write_synced(&temp_file, content.as_bytes()).and_then(|()| {
        // On Windows, rename fails if the destination already exists
        #[cfg(target_os = "windows")]
        if path.is_file() {
            fs::remove_file(path)?;
        }
        fs::rename(&temp_file, path)
    });

    if let Err(e) = written {
        // Best effort; the write error is the one reported.
        let _ = fs::remove_file(&temp_file);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "Saved JSON");
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "output".into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{name}.tmp"))
}
