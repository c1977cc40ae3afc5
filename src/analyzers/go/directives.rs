//! Detection of the `go:noinline` compiler directive.
//!
//! The match is a case-sensitive substring search over the comments
//! lexically attached to a declaration. It is a textual heuristic, not a
//! pragma parse: a doc comment merely mentioning the directive string
//! also matches, and that behavior is kept on purpose.

use std::collections::HashMap;
use tree_sitter::Node;

/// Pragma that tells the Go compiler not to inline the declaration that
/// follows it.
pub const NOINLINE_DIRECTIVE: &str = "go:noinline";

/// Precomputed mapping from top-level declarations to their associated
/// comments: the contiguous run of comment lines ending directly above
/// the declaration, with no blank line in between, plus any trailing
/// comment on the declaration's closing line. Keys are stable
/// `Node::id` values, so declarations need no back-pointers to comments.
#[derive(Debug, Default)]
pub struct CommentIndex {
    by_decl: HashMap<usize, Vec<String>>,
}

impl CommentIndex {
    pub fn build(root: Node, source: &str) -> Self {
        let mut by_decl: HashMap<usize, Vec<String>> = HashMap::new();
        let mut run: Vec<String> = Vec::new();
        let mut run_end_row: Option<usize> = None;
        let mut last_decl: Option<(usize, usize)> = None;

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {
                    // A comment on the closing line of the previous
                    // declaration trails that declaration and never
                    // starts a run for the next one.
                    if let Some((id, end_row)) = last_decl {
                        if child.start_position().row == end_row {
                            if let Ok(text) = child.utf8_text(source.as_bytes()) {
                                by_decl.entry(id).or_default().push(text.to_string());
                            }
                            continue;
                        }
                    }
                    // A gap of more than one line starts a fresh run.
                    if let Some(end) = run_end_row {
                        if child.start_position().row > end + 1 {
                            run.clear();
                        }
                    }
                    if let Ok(text) = child.utf8_text(source.as_bytes()) {
                        run.push(text.to_string());
                    }
                    run_end_row = Some(child.end_position().row);
                }
                "function_declaration" | "method_declaration" => {
                    let adjacent =
                        run_end_row.is_some_and(|end| end + 1 == child.start_position().row);
                    if adjacent && !run.is_empty() {
                        by_decl.insert(child.id(), std::mem::take(&mut run));
                    }
                    run.clear();
                    run_end_row = None;
                    last_decl = Some((child.id(), child.end_position().row));
                }
                _ => {
                    run.clear();
                    run_end_row = None;
                    last_decl = None;
                }
            }
        }

        Self { by_decl }
    }

    /// Whether any comment associated with `decl` mentions the noinline
    /// directive. Declarations with no associated comments yield false.
    pub fn has_noinline(&self, decl: Node) -> bool {
        self.by_decl
            .get(&decl.id())
            .is_some_and(|comments| comments.iter().any(|c| c.contains(NOINLINE_DIRECTIVE)))
    }
}
