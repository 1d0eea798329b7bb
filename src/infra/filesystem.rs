//! Filesystem operations
//!
//! The materializer: writes composed artifact text to disk with three
//! distinct disciplines. `write_file` truncates, `append_if_absent` is the
//! single marker-guarded idempotent merge, and `append_file` appends with
//! no guard at all (the target.exs snippet only runs once per project
//! because directory-existence validation blocks re-entry; invoking it
//! twice double-appends, and tests assert exactly that).

use std::io::Write;
use std::path::Path;

use crate::core::scaffold::{ArtifactSpec, WriteMode};
use crate::error::FilesystemError;

/// Create a directory and all parent directories; no error if it already
/// exists
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write content to a file, truncating any previous content
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Append `block` unless `marker` is already present in the file.
///
/// Returns `true` if the block was appended, `false` if the marker made it
/// a no-op. A missing file counts as empty.
pub fn append_if_absent(
    path: &Path,
    block: &str,
    marker: &str,
) -> Result<bool, FilesystemError> {
    let existing = if path.exists() {
        read_file(path)?
    } else {
        String::new()
    };

    if existing.contains(marker) {
        tracing::debug!(path = %path.display(), "marker present, skipping append");
        return Ok(false);
    }

    let merged = crate::core::scaffold::merge_once(&existing, block, marker);
    write_file(path, &merged)?;
    Ok(true)
}

/// Append `content` to a file unconditionally, creating it if missing.
/// No duplicate check is performed.
pub fn append_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FilesystemError::AppendFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    file.write_all(content.as_bytes())
        .map_err(|e| FilesystemError::AppendFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}

/// Materialize one artifact under `root` according to its write mode
pub fn materialize(root: &Path, artifact: &ArtifactSpec) -> Result<(), FilesystemError> {
    let path = root.join(&artifact.rel_path);
    match artifact.mode {
        WriteMode::Overwrite => {
            tracing::debug!(path = %path.display(), "writing artifact");
            write_file(&path, &artifact.content)
        }
        WriteMode::AppendIfAbsent { marker } => {
            append_if_absent(&path, &artifact.content, marker).map(|_| ())
        }
    }
}
