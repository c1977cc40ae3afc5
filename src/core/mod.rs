pub mod ast;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metrics for a single analyzed function or function literal.
///
/// Records are built once during the tree walk and never mutated.
/// Serialized field names are part of the output contract consumed by
/// the inlining cost model, hence the camelCase renames.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    /// 1-based line of the function's starting position.
    pub line: usize,
    /// Structural size of the body (statements and expressions).
    pub ast_count: usize,
    /// Calls to declared functions and qualified callees; builtins excluded.
    pub func_call_count: usize,
    /// A `go:noinline` directive is attached to the declaration.
    /// Always false for function literals.
    pub has_noinline: bool,
    /// The body contains any call-like construct, builtins included.
    pub has_any_calls: bool,
}

impl FunctionRecord {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            ast_count: 0,
            func_call_count: 0,
            has_noinline: false,
            has_any_calls: false,
        }
    }
}

/// All function records extracted from one source file, in pre-order
/// (document) position.
#[derive(Clone, Debug)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub records: Vec<FunctionRecord>,
}
