//! Typed errors for the analysis boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the analysis itself.
///
/// There is exactly one analysis-level failure: the input is not valid
/// Go. Everything else inside the metric algorithms (unresolved names,
/// absent comments, empty bodies) is normal data and yields zero/false
/// record fields rather than an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input could not be parsed as Go source. No records are
    /// produced; the run aborts before any metric computation.
    #[error("{}: not valid Go source", path.display())]
    Parse { path: PathBuf },
}

impl AnalysisError {
    /// Process exit status for this error. Parse failures get a code of
    /// their own so callers can tell "bad input" from I/O errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalysisError::Parse { .. } => 2,
        }
    }
}
