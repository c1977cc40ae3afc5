//! Go function enumeration and per-function cost metrics.
//!
//! One pre-order walk over the file locates every named declaration with
//! a body and every function literal, then runs the independent metric
//! passes over each body. Records come out in document order.

mod calls;
mod directives;
mod node_count;

pub use calls::{count_function_calls, has_any_calls, is_builtin, DeclaredFunctions, BUILTINS};
pub use directives::{CommentIndex, NOINLINE_DIRECTIVE};
pub use node_count::count_nodes;

use crate::analyzers::Analyzer;
use crate::core::ast::GoAst;
use crate::core::{FileMetrics, FunctionRecord};
use crate::errors::AnalysisError;
use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use tree_sitter::{Node, Parser};

pub struct GoAnalyzer;

impl GoAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for GoAnalyzer {
    fn parse(&self, content: &str, path: PathBuf) -> Result<GoAst> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .context("Failed to set Go language")?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| AnalysisError::Parse { path: path.clone() })?;

        // tree-sitter recovers from syntax errors; the contract here is
        // all-or-nothing, so any ERROR node fails the whole run.
        if tree.root_node().has_error() {
            return Err(AnalysisError::Parse { path }.into());
        }

        Ok(GoAst {
            tree,
            source: content.to_string(),
            path,
        })
    }

    fn analyze(&self, ast: &GoAst) -> FileMetrics {
        let root = ast.root();
        let declared = DeclaredFunctions::from_root(root, &ast.source);
        let comments = CommentIndex::build(root, &ast.source);

        let mut records = Vec::new();
        collect_records(root, &ast.source, &declared, &comments, &mut records);
        debug!(
            "{}: {} function(s) analyzed",
            ast.path.display(),
            records.len()
        );

        FileMetrics {
            path: ast.path.clone(),
            records,
        }
    }
}

fn collect_records(
    node: Node,
    source: &str,
    declared: &DeclaredFunctions,
    comments: &CommentIndex,
    records: &mut Vec<FunctionRecord>,
) {
    match node.kind() {
        // Named declarations need a body to be analyzable; signatures of
        // externally implemented functions are skipped.
        "function_declaration" | "method_declaration" => {
            if let Some(body) = node.child_by_field_name("body") {
                let mut record = analyze_body(node, body, source, declared);
                record.has_noinline = comments.has_noinline(node);
                records.push(record);
            }
        }
        // Literals never carry the directive; has_noinline stays false.
        "func_literal" => {
            if let Some(body) = node.child_by_field_name("body") {
                records.push(analyze_body(node, body, source, declared));
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_records(child, source, declared, comments, records);
    }
}

fn analyze_body(
    func: Node,
    body: Node,
    source: &str,
    declared: &DeclaredFunctions,
) -> FunctionRecord {
    let mut record = FunctionRecord::new(func.start_position().row + 1);
    record.ast_count = count_nodes(body);
    record.func_call_count = count_function_calls(body, source, declared);
    record.has_any_calls = has_any_calls(body, source, declared);
    record
}
