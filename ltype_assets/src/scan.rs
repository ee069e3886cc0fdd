//! Directory scanners for the minimal (flat) and full (nested) passes.
//!
//! Every listing goes through [`list_dir`], which returns entries sorted by
//! file name so that identifiers only depend on the content tree, never on
//! the order the filesystem happens to return entries in.

pub mod minimal;
pub mod packs;

use crate::error::{BuildError, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// One directory entry, already known to have a UTF-8 name.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Lists the direct children of `dir` in sorted order.
///
/// Hidden entries (leading `.`) are skipped; symlinks are followed.
pub(crate) fn list_dir(dir: &Path) -> Result<Vec<Entry>> {
    if !dir.is_dir() {
        return Err(BuildError::MissingDirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| BuildError::InvalidName(entry.path().to_path_buf()))?
            .to_string();

        if name.starts_with('.') {
            log::debug!("Skipping hidden entry {}", entry.path().display());
            continue;
        }

        entries.push(Entry {
            name,
            is_dir: entry.file_type().is_dir(),
            path: entry.into_path(),
        });
    }

    Ok(entries)
}

/// Sorted sub-directories of `dir`.
pub(crate) fn list_subdirs(dir: &Path) -> Result<Vec<Entry>> {
    Ok(list_dir(dir)?.into_iter().filter(|e| e.is_dir).collect())
}

/// Sorted non-directory entries of `dir`.
pub(crate) fn list_files(dir: &Path) -> Result<Vec<Entry>> {
    Ok(list_dir(dir)?.into_iter().filter(|e| !e.is_dir).collect())
}

/// Like [`list_subdirs`] / [`list_files`] but an absent directory is empty.
pub(crate) fn list_optional(dir: &Path, dirs: bool) -> Result<Vec<Entry>> {
    if !dir.exists() {
        log::debug!("Optional directory {} not present", dir.display());
        return Ok(Vec::new());
    }
    if dirs {
        list_subdirs(dir)
    } else {
        list_files(dir)
    }
}

/// File name without its last extension (`a.b.png` → `a.b`).
pub(crate) fn strip_extension(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

/// Renders a path with `/` separators regardless of platform.
///
/// An absolute path keeps a single leading `/`, after the drive prefix on
/// Windows (`C:\games` → `C:/games`).
pub fn slash_path(path: &Path) -> String {
    let mut out = String::new();
    let mut separate = false;
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                out.push_str(&prefix.as_os_str().to_string_lossy());
                separate = false;
            }
            Component::RootDir => {
                out.push('/');
                separate = false;
            }
            other => {
                if separate {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
                separate = true;
            }
        }
    }
    out
}
