// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! package.json and package-manager introspection shared by the JS-family
//! adapters (TypeScript, Vitest/Jest, Playwright).

use serde_json::Value;

use crate::detect::DetectionContext;

/// Package manager governing a JS project, inferred from lockfiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Prefix for running a package.json script.
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Pnpm => "pnpm run",
            PackageManager::Yarn => "yarn run",
            PackageManager::Bun => "bun run",
        }
    }
}

/// Infer the package manager from the `packageManager` manifest field first,
/// then from lockfiles. Falls back to npm.
pub fn infer_package_manager(ctx: &DetectionContext) -> PackageManager {
    if let Some(pkg) = read_package_json(ctx)
        && let Some(field) = pkg.get("packageManager").and_then(Value::as_str)
    {
        let name = field.split('@').next().unwrap_or(field);
        match name {
            "pnpm" => return PackageManager::Pnpm,
            "yarn" => return PackageManager::Yarn,
            "bun" => return PackageManager::Bun,
            "npm" => return PackageManager::Npm,
            other => tracing::debug!("unrecognized packageManager field: {}", other),
        }
    }

    if ctx.file_exists("pnpm-lock.yaml") {
        PackageManager::Pnpm
    } else if ctx.file_exists("yarn.lock") {
        PackageManager::Yarn
    } else if ctx.file_exists("bun.lockb") || ctx.file_exists("bun.lock") {
        PackageManager::Bun
    } else {
        PackageManager::Npm
    }
}

/// Parse package.json from the context, if present and well-formed.
pub fn read_package_json(ctx: &DetectionContext) -> Option<Value> {
    let text = ctx.read_file("package.json")?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!("unparseable package.json: {}", err);
            None
        }
    }
}

/// Whether `name` appears in dependencies or devDependencies.
pub fn has_dependency(pkg: &Value, name: &str) -> bool {
    ["dependencies", "devDependencies"]
        .iter()
        .any(|section| pkg.get(section).and_then(|deps| deps.get(name)).is_some())
}

/// Whether a script with `name` is declared, returning its name for command
/// synthesis.
pub fn script_named(pkg: &Value, name: &str) -> Option<String> {
    pkg.get("scripts")
        .and_then(|scripts| scripts.get(name))
        .and_then(Value::as_str)
        .map(|_| name.to_string())
}

#[cfg(test)]
#[path = "js_tests.rs"]
mod tests;
