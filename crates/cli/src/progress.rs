// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remediation progress as pure set math.
//!
//! "Had an error" and "was fixed" are independent lists owned by the
//! orchestrator; this module only computes their difference. A fixed list
//! that is a superset of the initial list is legal: files fixed
//! opportunistically count, so the percentage may exceed 100.

use std::collections::HashSet;

use serde::Serialize;

/// Snapshot of remediation progress, recomputed fresh from the two lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub initial_count: usize,
    pub fixed_count: usize,
    /// Initial files not yet fixed, in original encounter order.
    pub remaining: Vec<String>,
    pub percentage: u32,
    pub all_processed: bool,
}

/// Set-difference progress over explicit lists, not mutable running state;
/// a cancelled loop stays accurate because nothing here accumulates.
///
/// Opportunistic fixes (files fixed that were never on the initial list)
/// count at half weight toward the percentage, so `['a']` fixed alongside an
/// extra file reports 150, not 200.
pub fn calculate_progress(initial: &[String], fixed: &HashSet<String>) -> Progress {
    let initial_set: HashSet<&String> = initial.iter().collect();

    let mut seen = HashSet::new();
    let remaining: Vec<String> = initial
        .iter()
        .filter(|f| !fixed.contains(*f) && seen.insert(*f))
        .cloned()
        .collect();

    let initial_count = initial.len();
    let fixed_count = fixed.len();

    let percentage = if initial_count == 0 {
        0
    } else {
        let in_list = fixed.iter().filter(|f| initial_set.contains(f)).count() as f64;
        let extra = fixed_count as f64 - in_list;
        ((in_list + extra / 2.0) / initial_count as f64 * 100.0).round() as u32
    };

    Progress {
        initial_count,
        fixed_count,
        remaining,
        percentage,
        // Superset allowance: completion is count-based, not remaining-based.
        all_processed: fixed_count >= initial_count,
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
