//! Group delimited records that share a non-empty value at the same field
//! position, closing the relation transitively, and report groups largest
//! first.
//!
//! ```
//! use linegroup::group_lines;
//!
//! let report = group_lines([
//!     r#""1";"";"""#,
//!     r#""";"2";"""#,
//!     r#""1";"2";"""#,
//!     r#""8";"";"""#,
//! ]);
//! assert_eq!(report.groups[0].members.len(), 3);
//! assert_eq!(report.groups[1].members.len(), 1);
//! ```

#[macro_use]
mod macros;
mod api;
pub mod engine;
mod error;
pub mod io;
pub mod record;

pub use api::{GroupRunVerbose, Options, group_file, group_lines, group_lines_with, group_records, group_verbose_with};
pub use engine::{GroupReport, ReportGroup, RunMetrics, RunStats};
pub use error::{Error, Result};
pub use io::{LoadStats, LoadedRecords};
pub use record::{Field, Record, RecordFormat, is_valid_syntax};

// --- Core identifiers ---------------------------------------------------------

/// Group identifier. Issued from 1 upwards in order of first appearance and
/// never reused.
pub type GroupId = u32;

/// "Members of `source` belong with `target`."
///
/// Logged by the assigner each time a record bridges its own group to another
/// one, in discovery order, without deduplication. The merger replays the log
/// once, in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeDirective {
    pub target: GroupId,
    pub source: GroupId,
}
