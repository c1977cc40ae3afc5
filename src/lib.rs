// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod core;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::analyzers::{analyze_file, Analyzer, GoAnalyzer};
pub use crate::core::{ast::GoAst, FileMetrics, FunctionRecord};
pub use crate::errors::AnalysisError;
pub use crate::io::output::{JsonWriter, OutputWriter};
