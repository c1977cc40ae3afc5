//! Call-site classification for a function body.
//!
//! Two metrics share one traversal shape but answer different questions:
//! `count_function_calls` counts calls that likely carry non-trivial
//! cost (declared functions and qualified callees, builtins excluded),
//! while `has_any_calls` reports whether anything call-like happens at
//! all (builtins included). The asymmetry is deliberate; do not unify
//! them. Both walks cover the complete body, nested function literals
//! included, unlike the node counter which treats a literal as opaque.

use std::collections::HashSet;
use tree_sitter::Node;

/// Go's predeclared builtin functions. Exact-match membership; these are
/// compiler primitives, not user-defined callables.
pub static BUILTINS: &[&str] = &[
    "append", "len", "cap", "copy", "new", "make", "delete", "close", "complex", "imag", "real",
    "print", "println", "panic", "recover",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Names of functions declared at the top level of the analyzed file.
///
/// Stand-in for object resolution: a bare callee is treated as
/// user-defined iff its name appears here. Methods are excluded since
/// they are not file-scope callables, and a local variable shadowing a
/// declared function name is accepted as a heuristic miss.
#[derive(Clone, Debug, Default)]
pub struct DeclaredFunctions {
    names: HashSet<String>,
}

impl DeclaredFunctions {
    pub fn from_root(root: Node, source: &str) -> Self {
        let mut names = HashSet::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() == "function_declaration" {
                if let Some(name) = child.child_by_field_name("name") {
                    if let Ok(text) = name.utf8_text(source.as_bytes()) {
                        names.insert(text.to_string());
                    }
                }
            }
        }
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Callee {
    /// Bare name of a function declared in this file.
    Declared,
    /// Bare name of a predeclared builtin.
    Builtin,
    /// Member/package-qualified callee; always assumed a real call.
    Qualified,
    /// Anything else: function-typed locals, conversions, immediately
    /// invoked literals. Classified as neither real nor present.
    Opaque,
}

fn classify_callee(call: Node, source: &str, declared: &DeclaredFunctions) -> Callee {
    let Some(callee) = call.child_by_field_name("function") else {
        return Callee::Opaque;
    };
    match callee.kind() {
        "identifier" => {
            let name = callee.utf8_text(source.as_bytes()).unwrap_or("");
            if is_builtin(name) {
                Callee::Builtin
            } else if declared.contains(name) {
                Callee::Declared
            } else {
                Callee::Opaque
            }
        }
        "selector_expression" => Callee::Qualified,
        _ => Callee::Opaque,
    }
}

/// Count "real" calls in a body: declared bare-name callees plus every
/// qualified callee. Undercounts true call sites by design. The walk
/// visits every call expression in the body, nested function literals
/// included, so a call inside a literal counts for the enclosing
/// function as well as for the literal's own record.
pub fn count_function_calls(body: Node, source: &str, declared: &DeclaredFunctions) -> usize {
    let mut count = 0;
    visit_calls(body, source, declared, &mut count);
    count
}

fn visit_calls(node: Node, source: &str, declared: &DeclaredFunctions, count: &mut usize) {
    if node.kind() == "call_expression" {
        match classify_callee(node, source, declared) {
            Callee::Declared | Callee::Qualified => *count += 1,
            Callee::Builtin | Callee::Opaque => {}
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit_calls(child, source, declared, count);
    }
}

/// Whether the body contains any call at all, builtins included.
/// Short-circuits on the first match; descends into nested literals
/// like `count_function_calls` does.
pub fn has_any_calls(node: Node, source: &str, declared: &DeclaredFunctions) -> bool {
    if node.kind() == "call_expression"
        && classify_callee(node, source, declared) != Callee::Opaque
    {
        return true;
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if has_any_calls(child, source, declared) {
            return true;
        }
    }
    false
}
