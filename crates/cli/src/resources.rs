// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resource-aware parallelism sizing for the remediation loop.
//!
//! `calculate_optimal_parallel` is a pure function over a point-in-time
//! [`ResourceSnapshot`]. The snapshot is inherently racy (memory measured now
//! may be gone when workers spawn); the design accepts this and relies on a
//! configurable reserve margin instead of a lock.
//!
//! The step ordering is load-bearing: memory/CPU min, then the saturation
//! reduction, then the hard clamp. Clamping before the reduction would
//! under-react on a saturated high-core machine.

use serde::Serialize;

/// Fewest workers ever recommended.
pub const MIN_PARALLEL: usize = 2;

/// Coordination overhead dominates past this many workers.
pub const MAX_PARALLEL_CAP: usize = 6;

/// Point-in-time read of system resources. Best-effort, never assumed exact.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceSnapshot {
    pub total_mem_gb: f64,
    pub available_mem_gb: f64,
    pub cpu_cores: usize,
    /// 1-minute load average.
    pub cpu_load: f64,
}

impl ResourceSnapshot {
    /// Capture current system resources.
    pub fn capture() -> Self {
        let mut sys = sysinfo::System::new();
        sys.refresh_memory();
        sys.refresh_cpu_list(sysinfo::CpuRefreshKind::nothing());
        const GB: f64 = 1024.0 * 1024.0 * 1024.0;
        Self {
            total_mem_gb: sys.total_memory() as f64 / GB,
            available_mem_gb: sys.available_memory() as f64 / GB,
            cpu_cores: sys.cpus().len().max(1),
            cpu_load: sysinfo::System::load_average().one,
        }
    }
}

/// Which constraint determined the final worker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LimitingFactor {
    Memory,
    Cpu,
    LoadSaturation,
    CoordinationCap,
    MinimumEnforced,
}

impl std::fmt::Display for LimitingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LimitingFactor::Memory => "memory",
            LimitingFactor::Cpu => "CPU",
            LimitingFactor::LoadSaturation => "load saturated",
            LimitingFactor::CoordinationCap => "coordination overhead capped",
            LimitingFactor::MinimumEnforced => "minimum enforced",
        };
        f.write_str(label)
    }
}

/// Load state recorded alongside the result for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Normal,
    Saturated,
}

/// Bounded worker count plus the reason it is what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParallelismResult {
    pub max_parallel: usize,
    pub limiting_factor: LimitingFactor,
    pub load: LoadStatus,
}

/// Map system resources and a per-worker memory budget to a bounded worker
/// count. Deterministic; recomputed fresh each call, never cached.
pub fn calculate_optimal_parallel(
    resources: &ResourceSnapshot,
    mem_per_worker_gb: f64,
    mem_reserve_gb: f64,
) -> ParallelismResult {
    let effective_mem_gb = (resources.available_mem_gb - mem_reserve_gb).max(0.0);
    let memory_bound = if mem_per_worker_gb > 0.0 {
        (effective_mem_gb / mem_per_worker_gb).floor() as usize
    } else {
        0
    };
    let cpu_bound = resources.cpu_cores;

    let raw_limit = memory_bound.min(cpu_bound);
    let raw_factor =
        if memory_bound < cpu_bound { LimitingFactor::Memory } else { LimitingFactor::Cpu };

    // 50% reduction when the 1-minute load has reached the core count.
    let saturated = resources.cpu_load >= resources.cpu_cores as f64;
    let candidate = if saturated { raw_limit / 2 } else { raw_limit };
    let load = if saturated { LoadStatus::Saturated } else { LoadStatus::Normal };

    let (max_parallel, limiting_factor) = if candidate > MAX_PARALLEL_CAP {
        (MAX_PARALLEL_CAP, LimitingFactor::CoordinationCap)
    } else if candidate < MIN_PARALLEL {
        (MIN_PARALLEL, LimitingFactor::MinimumEnforced)
    } else if saturated && candidate != raw_limit {
        (candidate, LimitingFactor::LoadSaturation)
    } else {
        (candidate, raw_factor)
    };

    ParallelismResult { max_parallel, limiting_factor, load }
}

/// Parse a memory-reserve specification: a percentage of total memory
/// (`"15%"`), an absolute amount (`"2048MB"`, `"4GB"`), or a bare number of
/// gigabytes (`"4"`). Returns gigabytes.
///
/// Negative and out-of-range values are configuration errors, not a
/// resource-shortage condition.
pub fn parse_memory_reserve(spec: &str, total_mem_gb: f64) -> Result<f64, crate::error::Error> {
    let spec = spec.trim();
    let bad = || crate::error::Error::Config(format!("invalid memory reserve: {spec:?}"));

    if let Some(percent) = spec.strip_suffix('%') {
        let value: f64 = percent.trim().parse().map_err(|_| bad())?;
        if !(0.0..=100.0).contains(&value) {
            return Err(crate::error::Error::Config(format!(
                "memory reserve percentage out of range: {value}"
            )));
        }
        return Ok(total_mem_gb * value / 100.0);
    }

    let lower = spec.to_ascii_lowercase();
    let (number, scale) = if let Some(mb) = lower.strip_suffix("mb") {
        (mb.trim().to_string(), 1.0 / 1024.0)
    } else if let Some(gb) = lower.strip_suffix("gb") {
        (gb.trim().to_string(), 1.0)
    } else {
        (lower, 1.0)
    };

    let value: f64 = number.parse().map_err(|_| bad())?;
    if value < 0.0 {
        return Err(crate::error::Error::Config(format!("memory reserve is negative: {spec:?}")));
    }
    Ok(value * scale)
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
