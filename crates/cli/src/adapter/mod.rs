// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Framework adapters: everything framework-specific lives behind this
//! module's [`Adapter`] trait, from detection and command synthesis to
//! output parsing, verification, and resource hints.
//!
//! The adapter set is small and closed by design: TypeScript/JS builds, .NET
//! builds, Vitest/Jest unit tests, and Playwright E2E tests. Adapters are
//! stateless between calls; all per-project state lives in the
//! [`FrameworkConfig`] threaded through the pipeline.

pub mod common;
pub mod dotnet;
pub mod playwright;
pub mod typescript;
pub mod vitest;

use std::path::Path;
use std::sync::Arc;

pub use dotnet::{BuildConfiguration, DotNetAdapter, DotNetConfig};
pub use playwright::{PlaywrightAdapter, PlaywrightConfig};
pub use typescript::{TypeScriptAdapter, TypeScriptConfig};
pub use vitest::{TestRunnerKind, VitestAdapter, VitestConfig};

use crate::config::Config;
use crate::detect::DetectionContext;
use crate::error::Error;
use crate::issue::ParseOutcome;

/// Identity of a framework adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    TypeScript,
    DotNet,
    Vitest,
    Playwright,
}

/// Whether a framework governs builds or tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Build,
    Test,
}

impl FrameworkKind {
    pub fn name(&self) -> &'static str {
        match self {
            FrameworkKind::TypeScript => "typescript",
            FrameworkKind::DotNet => "dotnet",
            FrameworkKind::Vitest => "vitest",
            FrameworkKind::Playwright => "playwright",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FrameworkKind::TypeScript => "TypeScript/JavaScript",
            FrameworkKind::DotNet => ".NET",
            FrameworkKind::Vitest => "Vitest/Jest",
            FrameworkKind::Playwright => "Playwright",
        }
    }

    pub fn role(&self) -> Role {
        match self {
            FrameworkKind::TypeScript | FrameworkKind::DotNet => Role::Build,
            FrameworkKind::Vitest | FrameworkKind::Playwright => Role::Test,
        }
    }

    /// The `buildType` or `testType` value in the detection contract.
    pub fn type_label(&self) -> &'static str {
        match self {
            FrameworkKind::TypeScript => "typescript",
            FrameworkKind::DotNet => "dotnet",
            FrameworkKind::Vitest => "unit",
            FrameworkKind::Playwright => "e2e",
        }
    }
}

/// One entry of an adapter's ordered validation sequence.
///
/// `optional` entries must not fail the overall run on a nonzero exit; their
/// parsed issues are still collected for visibility.
#[derive(Debug, Clone)]
pub struct ValidationCommand {
    pub name: &'static str,
    pub command: String,
    pub optional: bool,
}

/// Static concurrency hints for the remediation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelStrategy {
    pub max_workers: usize,
    pub stagger_delay_ms: u64,
    pub requires_isolation: bool,
}

/// Detected per-framework settings, created once per detection and never
/// mutated afterwards. Callers needing a variant (e.g. a single-file verify
/// command) copy-and-extend via [`FrameworkConfig::with_file`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FrameworkConfig {
    TypeScript(TypeScriptConfig),
    DotNet(DotNetConfig),
    Vitest(VitestConfig),
    Playwright(PlaywrightConfig),
}

impl FrameworkConfig {
    pub fn kind(&self) -> FrameworkKind {
        match self {
            FrameworkConfig::TypeScript(_) => FrameworkKind::TypeScript,
            FrameworkConfig::DotNet(_) => FrameworkKind::DotNet,
            FrameworkConfig::Vitest(_) => FrameworkKind::Vitest,
            FrameworkConfig::Playwright(_) => FrameworkKind::Playwright,
        }
    }

    pub fn project_root(&self) -> &Path {
        match self {
            FrameworkConfig::TypeScript(c) => &c.project_root,
            FrameworkConfig::DotNet(c) => &c.project_root,
            FrameworkConfig::Vitest(c) => &c.project_root,
            FrameworkConfig::Playwright(c) => &c.project_root,
        }
    }

    /// The single file a narrowed command is scoped to, if any.
    pub fn file(&self) -> Option<&str> {
        match self {
            FrameworkConfig::TypeScript(c) => c.file.as_deref(),
            FrameworkConfig::DotNet(c) => c.file.as_deref(),
            FrameworkConfig::Vitest(c) => c.file.as_deref(),
            FrameworkConfig::Playwright(c) => c.file.as_deref(),
        }
    }

    /// Copy-and-extend with a target file for single-file command synthesis.
    pub fn with_file(&self, file: &str) -> FrameworkConfig {
        let mut copy = self.clone();
        match &mut copy {
            FrameworkConfig::TypeScript(c) => c.file = Some(file.to_string()),
            FrameworkConfig::DotNet(c) => c.file = Some(file.to_string()),
            FrameworkConfig::Vitest(c) => c.file = Some(file.to_string()),
            FrameworkConfig::Playwright(c) => c.file = Some(file.to_string()),
        }
        copy
    }

    /// Whether this config carries a solution manifest. Drives the detector's
    /// subsumption filter.
    pub fn has_solution(&self) -> bool {
        matches!(self, FrameworkConfig::DotNet(c) if c.solution.is_some())
    }
}

/// Capability set every concrete adapter satisfies.
///
/// Detection is a pure predicate over the context: no network, no process
/// execution. Command synthesis raises [`Error::MissingTarget`] when a
/// required target cannot be located: a configuration error, reported
/// distinctly from a build that ran and produced errors.
pub trait Adapter: Send + Sync {
    fn kind(&self) -> FrameworkKind;

    /// Inspect the context for framework fingerprints.
    fn can_detect(&self, ctx: &DetectionContext) -> bool;

    /// Derive adapter-specific settings purely from the context. Never fails
    /// for "config not found"; missing pieces become sentinel values that
    /// command synthesis defends against.
    fn detect_config(&self, ctx: &DetectionContext) -> FrameworkConfig;

    /// Shell command lines that build the project, in execution order.
    fn build_command(&self, config: &FrameworkConfig) -> Result<Vec<String>, Error>;

    /// Shell command line that runs the project's tests.
    fn test_command(&self, config: &FrameworkConfig) -> Result<String, Error>;

    /// Ordered validation sequence for the project.
    fn validation_commands(&self, config: &FrameworkConfig) -> Vec<ValidationCommand>;

    /// Parse captured build (or test-run) output. Order-independent and
    /// idempotent; unmatched lines are counted, never an error.
    fn parse_build_output(&self, text: &str) -> ParseOutcome;

    /// Parse captured output of the named validator.
    fn parse_validation_output(&self, text: &str, validator: &str) -> ParseOutcome;

    /// Command verifying the single file in `config.file()`, or `None` when
    /// this framework cannot verify one file in isolation and the caller
    /// must defer to a whole-project rebuild.
    fn verify_command(&self, config: &FrameworkConfig) -> Option<String>;

    /// Relative memory weight of one worker under this framework.
    fn resource_multiplier(&self) -> f64 {
        1.0
    }

    /// Concurrency hints for a remediation loop over this framework.
    fn parallel_strategy(&self, cpu_cores: usize) -> ParallelStrategy;
}

/// Registered adapters in fixed priority order.
///
/// Detection consults every adapter (all matches are collected, not just the
/// first), so the order here determines result order, which is
/// caller-visible and deterministic.
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn Adapter>>,
}

impl AdapterRegistry {
    /// Build the registry from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            adapters: vec![
                Arc::new(TypeScriptAdapter::new()) as Arc<dyn Adapter>,
                Arc::new(DotNetAdapter::new(
                    config.dotnet.excluded_warnings.clone(),
                    config.dotnet.configuration,
                )),
                Arc::new(VitestAdapter::new()),
                Arc::new(PlaywrightAdapter::new()),
            ],
        }
    }

    pub fn adapters(&self) -> &[Arc<dyn Adapter>] {
        &self.adapters
    }

    /// Look up an adapter by its contract name.
    pub fn by_name(&self, name: &str) -> Option<Arc<dyn Adapter>> {
        self.adapters.iter().find(|a| a.kind().name() == name).cloned()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Path comparison used when filtering verify output to one target file.
///
/// Toolchains print paths relative to varying roots, so compare by trailing
/// components after separator normalization.
pub fn path_matches(candidate: &str, target: &str) -> bool {
    let norm = |s: &str| -> Vec<String> {
        s.replace('\\', "/")
            .trim_start_matches("./")
            .split('/')
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    };
    let candidate = norm(candidate);
    let target = norm(target);
    if candidate.is_empty() || target.is_empty() {
        return false;
    }
    let (longer, shorter) =
        if candidate.len() >= target.len() { (&candidate, &target) } else { (&target, &candidate) };
    longer.ends_with(shorter.as_slice())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
