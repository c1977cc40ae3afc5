use anyhow::{Context, Result};
use clap::Parser;
use inlinemap::analyzers::{analyze_file, GoAnalyzer};
use inlinemap::cli::Cli;
use inlinemap::errors::AnalysisError;
use inlinemap::io::output::{JsonWriter, OutputWriter};
use std::io::Read;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("inlinemap: {err:#}");
        let code = err
            .downcast_ref::<AnalysisError>()
            .map_or(1, AnalysisError::exit_code);
        process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (content, path) = read_input(cli)?;
    let metrics = analyze_file(&content, path, &GoAnalyzer::new())?;

    let stdout = std::io::stdout().lock();
    if cli.pretty {
        JsonWriter::pretty(stdout).write_records(&metrics.records)
    } else {
        JsonWriter::new(stdout).write_records(&metrics.records)
    }
}

fn read_input(cli: &Cli) -> Result<(String, PathBuf)> {
    match &cli.path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((content, path.clone()))
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok((content, PathBuf::from("<stdin>")))
        }
    }
}
