//! Phase sequencing.
//!
//! ```text
//! Vec<Record> ─▶ assign ─▶ consolidate ─▶ build_report ─▶ GroupReport
//!                  │            │               │
//!                  └── timed ───┴──── timed ────┘
//! ```
//!
//! Phases run strictly one after another; each owns its structures until it
//! hands its output to the next.

use super::assign::assign;
use super::merge::consolidate;
use super::metrics::{RunMetrics, RunResult, RunStats};
use super::report::{GroupReport, build_report};
use crate::record::Record;
use log::debug;
use std::time::Instant;

/// Group `records` and return timing details alongside the report.
///
/// `records` must be valid and deduplicated; see [`crate::io::load_lines`].
pub fn run_with_metrics(records: Vec<Record>) -> RunResult {
    let total_start = Instant::now();
    let record_count = records.len();

    let assign_start = Instant::now();
    let assignment = assign(records);
    let assign_time = assign_start.elapsed();
    let groups_created = assignment.group_count();
    let directives = assignment.directives.len();
    let unions = assignment.unions;
    debug!("[assign] {record_count} records -> {groups_created} groups, {directives} directives, {unions} unions");

    let merge_start = Instant::now();
    let groups = consolidate(assignment);
    let merge_time = merge_start.elapsed();
    let retired = groups.retired();
    debug!("[merge] {retired} groups retired");

    let report_start = Instant::now();
    let report = build_report(groups);
    let report_time = report_start.elapsed();
    debug!("[report] {} groups, {} with more than one member", report.groups.len(), report.multi_member_count);

    let stats = RunStats {
        records: record_count,
        groups_created,
        directives,
        unions,
        retired,
        reported_groups: report.groups.len(),
        multi_member_groups: report.multi_member_count,
        largest_group: report.largest_group(),
    };
    let metrics =
        RunMetrics { total: total_start.elapsed(), assign: assign_time, merge: merge_time, report: report_time };

    RunResult { report, metrics, stats }
}

/// Group `records`, discarding timing details.
pub fn run(records: Vec<Record>) -> GroupReport {
    run_with_metrics(records).report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_reflect_each_phase() {
        let records = [r#""1";"";"""#, r#""";"2";"""#, r#""";"";"3""#, r#""1";"2";"""#, r#""";"2";"3""#, r#""9";"";"""#]
            .iter()
            .map(|l| Record::parse(l, ';'))
            .collect();

        let run = run_with_metrics(records);

        assert_eq!(
            run.stats,
            RunStats {
                records: 6,
                groups_created: 4,
                directives: 2,
                unions: 2,
                retired: 2,
                reported_groups: 2,
                multi_member_groups: 1,
                largest_group: 5,
            }
        );
        assert!(run.metrics.assign <= run.metrics.total);
        assert!(run.metrics.merge <= run.metrics.total);
    }

    #[test]
    fn run_matches_run_with_metrics() {
        let records: Vec<Record> = [r#""1""#, r#""2""#].iter().map(|l| Record::parse(l, ';')).collect();
        assert_eq!(run(records.clone()), run_with_metrics(records).report);
    }
}
