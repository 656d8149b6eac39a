//! Source file discovery and reading
//!
//! Finds the C-family files belonging to a project, starting from the
//! directory of the seed file. Read failures are per-file and
//! recoverable; the run reports them and moves on.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};

/// Extensions treated as C-family sources
const CPP_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "c++", "h", "hpp", "hxx", "h++"];

/// Header extensions, sorted ahead of implementation files
const HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hxx", "h++"];

/// Output directories that never contain project sources
const SKIPPED_DIRS: &[&str] = &["build", "bin", "obj", "Debug", "Release"];

/// One readable source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    /// Read a file, mapping failure to the recoverable per-file error
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| RenderError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Path shown in the file header, relative to the project base
    pub fn display_path(&self, base: &Path) -> String {
        self.path
            .strip_prefix(base)
            .unwrap_or(&self.path)
            .display()
            .to_string()
    }
}

fn is_cpp_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| CPP_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_header(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| HEADER_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn should_descend(name: &str) -> bool {
    !name.starts_with('.') && !SKIPPED_DIRS.contains(&name)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Unreadable directories are skipped, not fatal
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let descend = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(should_descend)
                .unwrap_or(false);
            if descend {
                walk(&path, found);
            }
        } else if is_cpp_file(&path) {
            found.push(path);
        }
    }
}

/// Sort key: headers first, then lexicographic within each group
fn sort_key(path: &Path) -> (u8, PathBuf) {
    (if is_header(path) { 0 } else { 1 }, path.to_path_buf())
}

/// Find all C-family files under the seed file's directory
///
/// Skips dot-directories and build output directories. Falls back to
/// just the seed file when the walk finds nothing.
pub fn find_project_files(seed: &Path) -> Vec<PathBuf> {
    let base = project_base(seed);

    let mut found = Vec::new();
    walk(&base, &mut found);
    found.sort_by_key(|p| sort_key(p));

    if found.is_empty() {
        vec![seed.to_path_buf()]
    } else {
        found
    }
}

/// Directory the project is rooted at (the seed file's parent)
pub fn project_base(seed: &Path) -> PathBuf {
    seed.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
