//! Input and output collaborators around the grouping core.
//!
//! Input: raw lines are validated against a [`RecordFormat`], parsed, and
//! deduplicated by content before the engine sees them. Invalid lines are
//! dropped silently (counted, and logged at `debug`).
//!
//! Output: a [`GroupReport`] is written as plain text:
//!
//! ```text
//! Count of groups with more than one element : 1
//! Group 1
//! "1";"2"
//! "3";"2"
//! Group 2
//! "4";""
//! ```

pub use crate::engine::{GROUP_PREFIX, HEADER_PREFIX};

use crate::engine::GroupReport;
use crate::error::{Error, Result};
use crate::record::{Record, RecordFormat};
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// What the input collaborator saw while loading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read from the source.
    pub lines: usize,
    /// Lines dropped for failing the record grammar (including non-UTF-8 lines).
    pub invalid: usize,
    /// Valid lines dropped as exact duplicates of an earlier line.
    pub duplicates: usize,
}

/// Valid, deduplicated records in first-occurrence order.
#[derive(Debug, Default, Clone)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    pub stats: LoadStats,
}

/// Accumulates records line by line.
struct Loader<'f> {
    format: &'f RecordFormat,
    seen: HashSet<Record>,
    out: LoadedRecords,
}

impl<'f> Loader<'f> {
    fn new(format: &'f RecordFormat) -> Self {
        Loader { format, seen: HashSet::new(), out: LoadedRecords::default() }
    }

    fn push(&mut self, line: &str) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.out.stats.lines += 1;

        if !self.format.is_valid_syntax(line) {
            self.out.stats.invalid += 1;
            debug!("[load] dropped invalid line {}: {:?}", self.out.stats.lines, preview(line));
            return;
        }

        let record = self.format.parse(line);
        if self.seen.contains(&record) {
            self.out.stats.duplicates += 1;
            return;
        }
        self.seen.insert(record.clone());
        self.out.records.push(record);
    }

    /// A line that is not UTF-8 can never match the grammar.
    fn push_bytes(&mut self, line: &[u8]) {
        match std::str::from_utf8(line) {
            Ok(text) => self.push(text),
            Err(err) => {
                self.out.stats.lines += 1;
                self.out.stats.invalid += 1;
                debug!(
                    "[load] dropped non-UTF-8 line {} ({err}): {:?}",
                    self.out.stats.lines,
                    preview(&String::from_utf8_lossy(line))
                );
            }
        }
    }

    fn finish(self) -> LoadedRecords {
        let stats = &self.out.stats;
        debug!(
            "[load] {} lines, {} invalid, {} duplicates, {} records",
            stats.lines,
            stats.invalid,
            stats.duplicates,
            self.out.records.len()
        );
        self.out
    }
}

fn preview(line: &str) -> String {
    line.chars().take(80).collect()
}

/// Validate, parse and deduplicate in-memory lines.
pub fn load_lines<I, S>(lines: I, format: &RecordFormat) -> LoadedRecords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut loader = Loader::new(format);
    for line in lines {
        loader.push(line.as_ref());
    }
    loader.finish()
}

/// Validate, parse and deduplicate every line of `reader`.
///
/// Lines are split on `\n` as raw bytes. Only read failures surface as errors;
/// undecodable lines are counted as invalid.
pub fn read_records<R: BufRead>(reader: R, format: &RecordFormat) -> io::Result<LoadedRecords> {
    let mut loader = Loader::new(format);
    for line in reader.split(b'\n') {
        loader.push_bytes(&line?);
    }
    Ok(loader.finish())
}

/// Load records from the file at `path`.
pub fn read_records_file(path: &Path, format: &RecordFormat) -> Result<LoadedRecords> {
    let input_access = |source| Error::InputAccess { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(input_access)?;
    read_records(BufReader::new(file), format).map_err(input_access)
}

/// Write `report` as text, re-joining members with `delimiter`.
pub fn write_report<W: Write>(report: &GroupReport, delimiter: char, mut writer: W) -> io::Result<()> {
    write!(writer, "{}", report.display(delimiter))?;
    writer.flush()
}

/// Write `report` to a file at `path`, replacing any existing file.
pub fn write_report_file(report: &GroupReport, delimiter: char, path: &Path) -> Result<()> {
    let output_write = |source| Error::OutputWrite { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(output_write)?;
    write_report(report, delimiter, BufWriter::new(file)).map_err(output_write)
}
