// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::collections::BTreeMap;
use std::io::Write;

use termcolor::{Buffer, ColorChoice, WriteColor};

use super::{ReportFormatter, RunReport};
use crate::color::scheme;

/// Text format report formatter.
pub struct TextFormatter {
    color: ColorChoice,
}

impl TextFormatter {
    pub fn new(color: ColorChoice) -> Self {
        Self { color }
    }

    fn buffer(&self) -> Buffer {
        match self.color {
            ColorChoice::Never => Buffer::no_color(),
            _ => Buffer::ansi(),
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String> {
        let mut out = self.buffer();

        for fw in &report.reports {
            out.set_color(&scheme::heading())?;
            write!(out, "{}", fw.display_name)?;
            out.reset()?;
            writeln!(out, " ({})", fw.project_root.display())?;

            for record in &fw.commands {
                let status = match record.exit_code {
                    Some(0) => "ok",
                    Some(_) if record.optional => "failed (optional)",
                    Some(_) => "failed",
                    None => "terminated",
                };
                writeln!(out, "  {} `{}`: {}", record.name, record.command, status)?;
            }

            let errors = fw.outcome.errors.len();
            if errors == 0 {
                out.set_color(&scheme::pass())?;
                writeln!(out, "  0 issues")?;
                out.reset()?;
            } else {
                out.set_color(&scheme::fail())?;
                writeln!(out, "  {} issue{}", errors, if errors == 1 { "" } else { "s" })?;
                out.reset()?;
                for file in &fw.files {
                    out.set_color(&scheme::path())?;
                    write!(out, "    {}", file.file)?;
                    out.reset()?;
                    writeln!(
                        out,
                        ": {} (test {}, type {}, lint {})",
                        file.total, file.test, file.types, file.lint
                    )?;
                }
            }

            // Excluded warnings stay visible, grouped by rule code.
            if !fw.outcome.excluded_warnings.is_empty() {
                let mut by_rule: BTreeMap<&str, (usize, bool)> = BTreeMap::new();
                for warning in &fw.outcome.excluded_warnings {
                    let entry = by_rule.entry(&warning.rule).or_insert((0, warning.security));
                    entry.0 += 1;
                }
                writeln!(out, "  excluded warnings:")?;
                for (rule, (count, security)) in by_rule {
                    let marker = if security { " [security advisory]" } else { "" };
                    writeln!(out, "    {}: {}{}", rule, count, marker)?;
                }
            }

            if fw.outcome.unmatched_lines > 0 {
                out.set_color(&scheme::dim())?;
                writeln!(out, "  {} output lines not recognized", fw.outcome.unmatched_lines)?;
                out.reset()?;
            }

            if let Some(err) = &fw.config_error {
                out.set_color(&scheme::fail())?;
                write!(out, "  configuration error")?;
                out.reset()?;
                writeln!(out, ": {}", err)?;
            }

            if let Some(raw) = &fw.raw_output {
                writeln!(out, "  no parseable issues; raw output follows:")?;
                for line in raw.lines() {
                    writeln!(out, "  | {}", line)?;
                }
            }
        }

        Ok(String::from_utf8_lossy(out.as_slice()).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
