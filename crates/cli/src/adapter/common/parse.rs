// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented parse utilities shared by the adapter parsers.
//!
//! Every parser is a per-line regex dispatch table: a line matches at most
//! one pattern (first match wins) and unmatched lines are dropped silently,
//! counted for diagnostic visibility only.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

/// Compile a static pattern known valid at authoring time.
#[allow(clippy::expect_used)]
pub(crate) fn regex(pattern: &'static str) -> Regex {
    Regex::new(pattern).expect("static pattern")
}

/// Substring prescreen so non-diagnostic lines skip the regex set entirely.
///
/// Compiler output is dominated by lines that carry no `error`/`warning`
/// marker at all; a single Aho-Corasick scan rejects those before any
/// pattern in the dispatch table runs.
pub(crate) struct Prescreen {
    finder: AhoCorasick,
}

impl Prescreen {
    pub(crate) fn new(markers: &[&str]) -> Self {
        #[allow(clippy::expect_used)]
        let finder = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(markers)
            .expect("static markers");
        Self { finder }
    }

    /// Shared prescreen for compiler-style diagnostics.
    pub(crate) fn diagnostics() -> &'static Self {
        static DIAGNOSTICS: LazyLock<Prescreen> =
            LazyLock::new(|| Prescreen::new(&["error", "warning"]));
        &DIAGNOSTICS
    }

    pub(crate) fn hit(&self, line: &str) -> bool {
        self.finder.is_match(line)
    }
}

/// True when a line is blank or whitespace-only. Blank lines are structural,
/// not unparsed content, so they never count as unmatched.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
