use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the I/O collaborators and by option validation.
///
/// The grouping core itself is infallible: once records are loaded, assignment,
/// consolidation and reporting always complete.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be opened or read. No report is produced.
    #[error("cannot read input '{}': {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The report destination could not be written. The grouping result is
    /// already computed when this is raised.
    #[error("cannot write report to '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The delimiter collides with the record grammar (a quote or a digit).
    #[error("invalid delimiter {0:?}: must not be a double quote or an ASCII digit")]
    InvalidDelimiter(char),
    /// The validation pattern built for a delimiter failed to compile.
    #[error("cannot build record pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
