//! Source directory enumeration.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A candidate file found directly inside the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as text (lossy for non-UTF-8 names).
    pub name: String,
    pub path: PathBuf,
}

/// True when `path` has one of `extensions` (ASCII case-insensitive, leading dot optional).
///
/// Dot files such as `.png` have no extension and never match.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Lists regular files directly in `dir` whose extension is in `extensions`.
///
/// No recursion; order is whatever the filesystem returns.
pub fn matching_files(dir: &Path, extensions: &[String]) -> Result<Vec<SourceFile>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || !has_extension(&path, extensions) {
            continue;
        }
        out.push(SourceFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }
    Ok(out)
}
