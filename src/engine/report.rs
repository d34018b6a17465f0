//! Report ordering.
//!
//! Turns the consolidated arena into the order groups are printed in:
//!
//! ```text
//! live ids (ascending) ──▶ bucket by size ──▶ buckets largest first
//!                                            (stable inside a bucket)
//!                      ──▶ display index 1..=n over the whole list
//! ```
//!
//! Singletons get display indices too; only the header count is restricted
//! to groups with two or more members.

use super::merge::Groups;
use crate::GroupId;
use crate::record::Record;
use std::collections::BTreeMap;
use std::fmt;

/// Header line prefix; followed by the number of multi-member groups.
pub const HEADER_PREFIX: &str = "Count of groups with more than one element : ";

/// Prefix of each group heading; followed by the display index.
pub const GROUP_PREFIX: &str = "Group ";

/// One group as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    /// 1-based position in the report.
    pub display_index: usize,
    /// Id of the consolidated group (its disjoint-set root).
    pub group_id: GroupId,
    /// Members in encounter order.
    pub members: Vec<Record>,
}

impl ReportGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Groups ordered by descending size, ready to be written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupReport {
    /// Number of groups with more than one member.
    pub multi_member_count: usize,
    pub groups: Vec<ReportGroup>,
}

impl GroupReport {
    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(ReportGroup::len).sum()
    }

    /// Size of the first (largest) group, or 0 for an empty report.
    pub fn largest_group(&self) -> usize {
        self.groups.first().map_or(0, ReportGroup::len)
    }

    /// Text view of the report, re-joining members with `delimiter`.
    pub fn display(&self, delimiter: char) -> ReportText<'_> {
        ReportText { report: self, delimiter }
    }

    /// Render the report text using `delimiter` to re-join members.
    pub fn render(&self, delimiter: char) -> String {
        self.display(delimiter).to_string()
    }
}

/// [`fmt::Display`] adapter returned by [`GroupReport::display`].
///
/// ```text
/// Count of groups with more than one element : <n>
/// Group 1
/// <member>
/// ...
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReportText<'a> {
    report: &'a GroupReport,
    delimiter: char,
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER_PREFIX}{}", self.report.multi_member_count)?;
        for group in &self.report.groups {
            writeln!(f, "{GROUP_PREFIX}{}", group.display_index)?;
            for member in &group.members {
                writeln!(f, "{}", member.join(self.delimiter))?;
            }
        }
        Ok(())
    }
}

/// Order the live groups of `groups` and number them.
pub fn build_report(groups: Groups) -> GroupReport {
    let mut buckets: BTreeMap<usize, Vec<GroupId>> = BTreeMap::new();
    for id in groups.live_ids() {
        buckets.entry(groups.size(id)).or_default().push(id);
    }

    let multi_member_count = buckets.range(2usize..).map(|(_, ids)| ids.len()).sum();

    let mut ordered: Vec<ReportGroup> = Vec::with_capacity(buckets.values().map(Vec::len).sum());
    for ids in buckets.values().rev() {
        for &id in ids {
            let display_index = ordered.len() + 1;
            ordered.push(ReportGroup { display_index, group_id: id, members: groups.members(id).cloned().collect() });
        }
    }

    GroupReport { multi_member_count, groups: ordered }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assign::assign;
    use crate::engine::merge::consolidate;

    fn report_for(lines: &[&str]) -> GroupReport {
        build_report(consolidate(assign(lines.iter().map(|l| Record::parse(l, ';')).collect())))
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = report_for(&[]);
        assert_eq!(report, GroupReport::default());
        assert_eq!(report.largest_group(), 0);
    }

    #[test]
    fn groups_are_ordered_by_descending_size() {
        let report = report_for(&[
            r#""1";"""#,
            r#""2";"""#,
            r#""2";"5""#,
            r#""3";"""#,
            r#""3";"6""#,
            r#""";"6""#,
        ]);

        let sizes: Vec<usize> = report.groups.iter().map(ReportGroup::len).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert_eq!(report.multi_member_count, 2);
        assert_eq!(report.record_count(), 6);
        assert_eq!(report.largest_group(), 3);
    }

    #[test]
    fn equal_sizes_keep_id_order_and_indices_span_all_groups() {
        let report = report_for(&[r#""1""#, r#""2""#, r#""3";"4""#, r#""3";"5""#, r#""6""#]);

        let ids: Vec<GroupId> = report.groups.iter().map(|g| g.group_id).collect();
        let indices: Vec<usize> = report.groups.iter().map(|g| g.display_index).collect();

        assert_eq!(ids, vec![3, 1, 2, 4]);
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(report.multi_member_count, 1);
    }

    #[test]
    fn retired_groups_are_not_reported() {
        let report = report_for(&[r#""1";"""#, r#""";"2""#, r#""1";"2""#]);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].group_id, 1);
        assert!(!report.groups[0].is_empty());
    }

    #[test]
    fn display_lists_header_then_each_group() {
        let report = report_for(&[r#""1";"""#, r#""1";"2""#, r#""3";"""#]);

        let expected = "Count of groups with more than one element : 1\n\
                        Group 1\n\
                        \"1\"|\"\"\n\
                        \"1\"|\"2\"\n\
                        Group 2\n\
                        \"3\"|\"\"\n";
        assert_eq!(report.display('|').to_string(), expected);
        assert_eq!(report.render('|'), expected);
    }

    #[test]
    fn empty_report_renders_only_the_header() {
        assert_eq!(GroupReport::default().render(';'), "Count of groups with more than one element : 0\n");
    }
}
