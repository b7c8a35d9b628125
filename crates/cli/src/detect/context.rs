// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only filesystem view handed to adapters during detection.
//!
//! The context snapshots a bounded file listing once per candidate root;
//! `glob` answers from the snapshot so adapters never re-walk the tree.

use std::path::{Path, PathBuf};

use globset::Glob;
use ignore::WalkBuilder;

/// Dependency/build directories that never participate in detection.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "bin",
    "obj",
    "dist",
    "build",
    "out",
    "coverage",
    ".git",
];

/// Immutable view of a candidate project root.
///
/// Built once per detection pass. `glob` patterns match the full relative
/// path, so `*.sln` finds solution files at any depth of the snapshot.
pub struct DetectionContext {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl DetectionContext {
    /// Snapshot `root` down to `max_depth` levels, skipping hidden and
    /// dependency directories plus any extra excluded directory names.
    pub fn new(root: &Path, max_depth: usize, exclude: &[String]) -> Self {
        let mut files = Vec::new();
        // Hidden files stay in the snapshot (adapters fingerprint on
        // .editorconfig, .prettierrc); hidden directories do not.
        let walker = WalkBuilder::new(root)
            .max_depth(Some(max_depth))
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if SKIP_DIRS.contains(&name.as_ref()) {
                    return false;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && name.starts_with('.'))
            })
            .build();

        for entry in walker {
            let Ok(entry) = entry else {
                // Unreadable entries are skipped, not fatal.
                continue;
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            if exclude
                .iter()
                .any(|dir| relative.components().any(|c| c.as_os_str().to_str() == Some(dir.as_str())))
            {
                continue;
            }
            files.push(relative.to_path_buf());
        }
        files.sort();

        Self { root: root.to_path_buf(), files }
    }

    pub fn project_root(&self) -> &Path {
        &self.root
    }

    /// Whether `relative` exists in the snapshot.
    pub fn file_exists(&self, relative: &str) -> bool {
        self.files.iter().any(|f| f == Path::new(relative))
    }

    /// Read a file under the root. Returns `None` for missing or unreadable
    /// files; detection never fails on an unreadable entry.
    pub fn read_file(&self, relative: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(relative)).ok()
    }

    /// All snapshot paths matching `pattern`.
    pub fn glob(&self, pattern: &str) -> Vec<PathBuf> {
        let Ok(glob) = Glob::new(pattern) else {
            tracing::warn!("invalid glob pattern: {}", pattern);
            return Vec::new();
        };
        let matcher = glob.compile_matcher();
        self.files.iter().filter(|f| matcher.is_match(f)).cloned().collect()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
