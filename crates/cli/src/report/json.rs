// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output and the stable detection contract.

use serde_json::json;

use super::{ReportFormatter, RunReport};
use crate::adapter::Role;
use crate::detect::Detection;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String> {
        let value = json!({
            "generated": chrono::Utc::now().to_rfc3339(),
            "errors": report.total_errors(),
            "excluded_warnings": report.total_excluded(),
            "frameworks": report.reports,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// The stable JSON shape consumed by the orchestration layer: one object per
/// detected project, `buildType` or `testType` depending on the framework's
/// role, adapter-specific settings under `config`.
pub fn detection_contract(detections: &[Detection]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = detections
        .iter()
        .map(|d| {
            let kind = d.kind();
            let type_key = match kind.role() {
                Role::Build => "buildType",
                Role::Test => "testType",
            };
            json!({
                "framework": kind.name(),
                "displayName": kind.display_name(),
                type_key: kind.type_label(),
                "projectRoot": d.project_root,
                "config": d.config,
            })
        })
        .collect();
    serde_json::Value::Array(entries)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
