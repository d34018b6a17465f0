//! Engine run metrics.
//!
//! Small structs used to observe a grouping run:
//!
//! - `pipeline::run` for normal operation.
//! - `pipeline::run_with_metrics` for profiling and for the CLI summary.
//!
//! Timings are wall-clock per phase. Counters are collected from the phase
//! outputs after each phase finishes, so the hot loops stay untouched.

use super::report::GroupReport;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for [`run_with_metrics`](super::pipeline::run_with_metrics).
    pub total: Duration,
    /// Single-pass group assignment.
    pub assign: Duration,
    /// Directive replay into the groups arena.
    pub merge: Duration,
    /// Bucketing and ordering.
    pub report: Duration,
}

/// Counters describing what a run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Deduplicated records fed to the assigner.
    pub records: usize,
    /// Group ids opened during assignment.
    pub groups_created: usize,
    /// Merge directives logged (not deduplicated).
    pub directives: usize,
    /// Directives that joined two previously separate groups.
    pub unions: usize,
    /// Groups emptied by consolidation.
    pub retired: usize,
    /// Groups present in the final report.
    pub reported_groups: usize,
    /// Reported groups with two or more members.
    pub multi_member_groups: usize,
    /// Member count of the largest group.
    pub largest_group: usize,
}

/// Engine output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub report: GroupReport,
    pub metrics: RunMetrics,
    pub stats: RunStats,
}
