use crate::core::ast::GoAst;
use crate::core::FileMetrics;
use anyhow::Result;
use std::path::PathBuf;

pub mod go;

pub use go::GoAnalyzer;

pub trait Analyzer {
    /// Parse a full source text into a position- and comment-annotated
    /// tree. The only failure mode is invalid input; see
    /// [`crate::errors::AnalysisError::Parse`].
    fn parse(&self, content: &str, path: PathBuf) -> Result<GoAst>;

    /// Run the per-function metric passes over an already-parsed file.
    /// Infallible: unresolved names, missing comments, and empty bodies
    /// are data, not errors.
    fn analyze(&self, ast: &GoAst) -> FileMetrics;
}

/// Parse and analyze one source file. A parse failure aborts before any
/// metric computation, so a failed run produces no records at all.
pub fn analyze_file(content: &str, path: PathBuf, analyzer: &dyn Analyzer) -> Result<FileMetrics> {
    analyzer
        .parse(content, path)
        .map(|ast| analyzer.analyze(&ast))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_file_success() {
        let metrics = analyze_file(
            "package main\n\nfunc f() {}\n",
            PathBuf::from("f.go"),
            &GoAnalyzer::new(),
        )
        .unwrap();
        assert_eq!(metrics.path, PathBuf::from("f.go"));
        assert_eq!(metrics.records.len(), 1);
    }

    #[test]
    fn test_analyze_file_propagates_parse_failure() {
        let result = analyze_file("func {", PathBuf::from("broken.go"), &GoAnalyzer::new());
        assert!(result.is_err());
    }
}
