use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inlinemap")]
#[command(about = "Per-function syntax-tree cost metrics for Go inlining heuristics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Go source file to analyze (reads stdin when omitted)
    pub path: Option<PathBuf>,

    /// Pretty-print the JSON records
    #[arg(long)]
    pub pretty: bool,
}
