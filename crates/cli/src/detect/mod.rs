// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Framework discovery.
//!
//! Scans a root directory plus subdirectories up to a bounded depth, asks
//! every registered adapter about each candidate, and collects all matches:
//! a monorepo with N frameworks yields N independent detections. Only when
//! nothing matches does an opt-in upward walk look for a governing project
//! above the start directory.

mod context;

pub use context::DetectionContext;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::{Adapter, AdapterRegistry, FrameworkConfig, FrameworkKind};

/// Depth of candidate subdirectories considered below the start root.
const CANDIDATE_DEPTH: usize = 2;

/// Depth of the file snapshot built for each candidate root.
const CONTEXT_DEPTH: usize = 4;

/// Directories never considered as candidate roots.
const SKIP_CANDIDATES: &[&str] =
    &["node_modules", "target", "bin", "obj", "dist", "build", "out", "coverage"];

/// One detected framework/root pair.
pub struct Detection {
    pub adapter: Arc<dyn Adapter>,
    pub project_root: PathBuf,
    pub config: FrameworkConfig,
}

impl Detection {
    pub fn kind(&self) -> FrameworkKind {
        self.adapter.kind()
    }
}

/// Detector options, normally sourced from `[detect]` in triage.toml.
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    /// Extra directory names excluded from context snapshots.
    pub exclude: Vec<String>,
    /// Walk upward toward the filesystem root when nothing matches below.
    pub search_upward: bool,
}

/// Run every registered adapter against the root and its subdirectories.
///
/// All matches are collected in registry priority order per candidate root;
/// detection never stops at the first hit. Result order is deterministic and
/// caller-visible.
pub fn detect_frameworks(
    root: &Path,
    registry: &AdapterRegistry,
    options: &DetectOptions,
) -> Vec<Detection> {
    let mut detections = Vec::new();

    for dir in candidate_roots(root) {
        let ctx = DetectionContext::new(&dir, CONTEXT_DEPTH, &options.exclude);
        for adapter in registry.adapters() {
            if adapter.can_detect(&ctx) {
                tracing::debug!("{} detected at {}", adapter.kind().name(), dir.display());
                detections.push(Detection {
                    adapter: Arc::clone(adapter),
                    project_root: dir.clone(),
                    config: adapter.detect_config(&ctx),
                });
            }
        }
    }

    filter_subsumed(&mut detections);

    if detections.is_empty() && options.search_upward {
        detections = search_upward(root, registry, options);
    }

    detections
}

/// The start root plus its readable subdirectories down to CANDIDATE_DEPTH,
/// skipping dot-directories and dependency directories. Unreadable
/// directories are skipped, not fatal.
fn candidate_roots(root: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![root.to_path_buf()];
    collect_subdirs(root, CANDIDATE_DEPTH, &mut dirs);
    dirs
}

fn collect_subdirs(dir: &Path, depth_left: usize, out: &mut Vec<PathBuf>) {
    if depth_left == 0 {
        return;
    }
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::debug!("skipping unreadable directory: {}", dir.display());
        return;
    };
    let mut subdirs: Vec<PathBuf> = entries
        .flatten()
        .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.') && !SKIP_CANDIDATES.contains(&n))
        })
        .collect();
    subdirs.sort();
    for sub in subdirs {
        out.push(sub.clone());
        collect_subdirs(&sub, depth_left - 1, out);
    }
}

/// Remove detections subsumed by a solution manifest: a .NET detection whose
/// root is a strict descendant of a solution-bearing root, and which has no
/// solution of its own, is already covered by that solution's build.
///
/// Other frameworks below a solution root are kept; a monorepo's frontend
/// is not governed by the .sln next to it.
fn filter_subsumed(detections: &mut Vec<Detection>) {
    let solution_roots: Vec<PathBuf> = detections
        .iter()
        .filter(|d| d.config.has_solution())
        .map(|d| d.project_root.clone())
        .collect();
    if solution_roots.is_empty() {
        return;
    }
    detections.retain(|d| {
        if d.kind() != FrameworkKind::DotNet || d.config.has_solution() {
            return true;
        }
        let subsumed = solution_roots
            .iter()
            .any(|sol| d.project_root != *sol && d.project_root.starts_with(sol));
        if subsumed {
            tracing::debug!(
                "dropping {} (covered by a sibling solution)",
                d.project_root.display()
            );
        }
        !subsumed
    });
}

/// Walk parents of `root`, stopping at the first directory level where any
/// adapter matches. Opt-in; used only when the downward scan found nothing.
fn search_upward(
    root: &Path,
    registry: &AdapterRegistry,
    options: &DetectOptions,
) -> Vec<Detection> {
    let mut current = root.parent();
    while let Some(dir) = current {
        let ctx = DetectionContext::new(dir, CONTEXT_DEPTH, &options.exclude);
        let matches: Vec<Detection> = registry
            .adapters()
            .iter()
            .filter(|a| a.can_detect(&ctx))
            .map(|adapter| Detection {
                adapter: Arc::clone(adapter),
                project_root: dir.to_path_buf(),
                config: adapter.detect_config(&ctx),
            })
            .collect();
        if !matches.is_empty() {
            return matches;
        }
        current = dir.parent();
    }
    Vec::new()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
