//! Grouping engine.
//!
//! This module is the entry point for the grouping core. It is split into
//! focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! Vec<Record> (valid, deduplicated)
//!        │
//!        v
//!  assign (assign.rs)
//!    - one pass, first indexed field decides the group
//!    - bridges: log MergeDirective + union now (disjoint.rs)
//!        │
//!        v
//!  consolidate (merge.rs)
//!    - arena slot per group id
//!    - replay directives, move members into their root slot
//!        │
//!        v
//!  build_report (report.rs)
//!    - bucket by size, largest first, stable inside a bucket
//!    - display indices 1..=n
//!        │
//!        v
//!    GroupReport
//! ```
//!
//! Two records end up in the same group iff they are connected through a chain
//! of records sharing a non-empty value at the same field position. The
//! disjoint-set makes that hold regardless of input order: the assigner unions
//! groups the moment it sees a bridge, and the merger only ever moves members
//! into final roots.
//!
//! ## Responsibilities by module
//!
//! - `assign.rs`: field index, group ids, directive log.
//! - `disjoint.rs`: union-find with path compression and union-by-size.
//! - `merge.rs`: the `Groups` arena and directive replay.
//! - `report.rs`: `GroupReport` and its ordering.
//! - `pipeline.rs`: runs the phases in order, with timing.
//! - `metrics.rs`: timing and counters for a run.
//!
//! ## Debugging
//!
//! Every phase logs through the `log` facade. The binary prints these when
//! `LINEGROUP_DEBUG` is set (`LINEGROUP_DEBUG=trace` for per-record traces).

#[path = "engine/assign.rs"]
mod assign;
#[path = "engine/disjoint.rs"]
mod disjoint;
#[path = "engine/merge.rs"]
mod merge;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/report.rs"]
mod report;


pub use assign::{Assignment, assign};
pub use disjoint::DisjointSet;
pub use merge::{Groups, consolidate};
pub use metrics::{RunMetrics, RunResult, RunStats};
pub use pipeline::{run, run_with_metrics};
pub use report::{GROUP_PREFIX, GroupReport, HEADER_PREFIX, ReportGroup, ReportText, build_report};
