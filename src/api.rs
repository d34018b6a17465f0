use crate::engine::{self, GroupReport, RunMetrics, RunStats};
use crate::error::Result;
use crate::io::{self, LoadStats};
use crate::record::{Record, RecordFormat};
use std::path::Path;

/// Options that affect how lines are read and reports are rendered.
#[derive(Debug, Clone, Default)]
pub struct Options {
    format: RecordFormat,
}

impl Options {
    /// Options for records separated by `delimiter`.
    ///
    /// Fails when the delimiter is a double quote or an ASCII digit.
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        Ok(Options { format: RecordFormat::new(delimiter)? })
    }

    pub fn delimiter(&self) -> char {
        self.format.delimiter()
    }

    pub fn format(&self) -> &RecordFormat {
        &self.format
    }
}

/// Result from [`group_verbose_with`] and [`group_file`].
#[derive(Debug, Clone)]
pub struct GroupRunVerbose {
    pub report: GroupReport,
    /// What the input collaborator kept and dropped.
    pub load: LoadStats,
    /// Per-phase timing.
    pub metrics: RunMetrics,
    /// Per-phase counters.
    pub stats: RunStats,
}

/// Group `lines` using `;` as the delimiter.
///
/// # Example
/// ```
/// use linegroup::group_lines;
///
/// let report = group_lines([r#""1";"2""#, r#""3";"2""#, r#""4";"""#]);
/// assert_eq!(report.multi_member_count, 1);
/// assert_eq!(report.groups[0].members.len(), 2);
/// ```
pub fn group_lines<I, S>(lines: I) -> GroupReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group_lines_with(lines, &Options::default())
}

/// Group `lines` with the provided `options`. Invalid and duplicate lines are
/// dropped before grouping.
pub fn group_lines_with<I, S>(lines: I, options: &Options) -> GroupReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    engine::run(io::load_lines(lines, options.format()).records)
}

/// Group `lines` with `options` and return load counters and run metrics too.
pub fn group_verbose_with<I, S>(lines: I, options: &Options) -> GroupRunVerbose
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let loaded = io::load_lines(lines, options.format());
    verbose_from(loaded)
}

/// Group records that are already validated and deduplicated.
pub fn group_records(records: Vec<Record>) -> GroupReport {
    engine::run(records)
}

/// Read, validate and group the file at `path`.
///
/// Only reading can fail here. Writing the report is left to the caller (see
/// [`crate::io::write_report_file`]) so a write failure never loses the result.
pub fn group_file(path: impl AsRef<Path>, options: &Options) -> Result<GroupRunVerbose> {
    let loaded = io::read_records_file(path.as_ref(), options.format())?;
    Ok(verbose_from(loaded))
}

fn verbose_from(loaded: io::LoadedRecords) -> GroupRunVerbose {
    let run = engine::run_with_metrics(loaded.records);
    GroupRunVerbose { report: run.report, load: loaded.stats, metrics: run.metrics, stats: run.stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn group_lines_uses_semicolon() {
        let report = group_lines([r#""1";"2""#, r#""1";"3""#]);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.multi_member_count, 1);
    }

    #[test]
    fn custom_delimiter_changes_grammar_and_rendering() {
        let options = Options::with_delimiter(',').unwrap();
        assert_eq!(options.delimiter(), ',');

        let report = group_lines_with([r#""1","2""#, r#""1";"2""#, r#""5","2""#], &options);
        assert_eq!(report.record_count(), 2);
        assert_eq!(report.render(options.delimiter()).lines().nth(2), Some(r#""1","2""#));
    }

    #[test]
    fn invalid_delimiter_is_rejected() {
        assert!(matches!(Options::with_delimiter('"'), Err(Error::InvalidDelimiter('"'))));
    }

    #[test]
    fn verbose_run_reports_load_and_engine_counters() {
        let run = group_verbose_with([r#""1""#, r#""1""#, "x", r#""2""#], &Options::default());

        assert_eq!(run.load, LoadStats { lines: 4, invalid: 1, duplicates: 1 });
        assert_eq!(run.stats.records, 2);
        assert_eq!(run.stats.reported_groups, 2);
        assert_eq!(run.stats.multi_member_groups, 0);
        assert!(run.metrics.assign <= run.metrics.total);
    }

    #[test]
    fn group_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        std::fs::write(&path, "\"1\";\"\"\n\"\";\"2\"\n\"1\";\"2\"\n").unwrap();

        let run = group_file(&path, &Options::default()).unwrap();
        assert_eq!(run.report.groups.len(), 1);
        assert_eq!(run.report.largest_group(), 3);
    }

    #[test]
    fn group_records_skips_loading() {
        let records = vec![Record::parse(r#""1""#, ';'), Record::parse(r#""1";"2""#, ';')];
        assert_eq!(group_records(records).multi_member_count, 1);
    }
}
