// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! triage.toml configuration.
//!
//! Every section has working defaults; an absent config file is not an
//! error. Invalid values are configuration errors, reported distinctly from
//! anything the toolchains produce.

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detect: DetectConfig,
    pub parallel: ParallelConfig,
    pub dotnet: DotNetSettings,
}

/// `[detect]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Extra directory names excluded from detection snapshots.
    pub exclude: Vec<String>,
    /// Walk upward toward the filesystem root when nothing matches below.
    pub search_upward: bool,
}

/// `[parallel]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Expected peak memory of one fix worker, in GB.
    pub mem_per_worker_gb: f64,
    /// Memory held back from the calculation: "15%", "2048MB", "4GB", or a
    /// bare number of GB.
    pub reserve: String,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { mem_per_worker_gb: 3.0, reserve: "2GB".to_string() }
    }
}

/// `[dotnet]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DotNetSettings {
    /// Warning rule codes that never block a pass/fail decision.
    pub excluded_warnings: Vec<String>,
    pub configuration: crate::adapter::BuildConfiguration,
}

impl DotNetSettings {
    fn default_excluded_warnings() -> Vec<String> {
        ["NU1901", "NU1902", "NU1903", "NU1904", "DX1000"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for DotNetSettings {
    fn default() -> Self {
        Self {
            excluded_warnings: Self::default_excluded_warnings(),
            configuration: crate::adapter::BuildConfiguration::Debug,
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, Error> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let config: Config = toml::from_str(&text)
        .map_err(|e| Error::Config(format!("cannot parse {}: {}", path.display(), e)))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), Error> {
    if config.parallel.mem_per_worker_gb <= 0.0 {
        return Err(Error::Config(format!(
            "parallel.mem_per_worker_gb must be positive, got {}",
            config.parallel.mem_per_worker_gb
        )));
    }
    Ok(())
}

/// Default config file contents written by `triage init`.
pub const DEFAULT_CONFIG_TOML: &str = "\
# triage configuration

[detect]
# exclude = [\"vendor\"]
# search_upward = false

[parallel]
# mem_per_worker_gb = 3.0
# reserve = \"2GB\"

[dotnet]
# configuration = \"Debug\"
# excluded_warnings = [\"NU1901\", \"NU1902\", \"NU1903\", \"NU1904\", \"DX1000\"]
";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
