//! Structural size metric over a function body.
//!
//! Counts statement and expression nodes, each contributing one unit.
//! Grouping constructs (blocks, parameter/field lists, literal bodies)
//! carry no weight of their own, and the key of a keyed composite-literal
//! entry is invisible to the metric entirely. The result is a size
//! measure biased toward statement/expression density rather than raw
//! node population.

use tree_sitter::Node;

/// Weight class of a tree-sitter-go node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeClass {
    /// Purely syntactic grouping: weight 0, children still visited.
    Grouping,
    /// Composite-literal `key: value` entry: only the value subtree is
    /// counted, the key is skipped outright.
    KeyedEntry,
    Statement,
    Expression,
    /// Declaration specs, clauses, comments: weight 0, descend.
    Other,
}

fn classify(kind: &str) -> NodeClass {
    match kind {
        "block" | "parameter_list" | "parameter_declaration" | "variadic_parameter_declaration"
        | "field_declaration_list" | "field_declaration" | "literal_value" | "literal_element"
        | "expression_list" | "argument_list" => NodeClass::Grouping,
        "keyed_element" => NodeClass::KeyedEntry,
        // In-body declarations occupy a statement slot, as do switch and
        // select clauses.
        "short_var_declaration" | "var_declaration" | "const_declaration" | "type_declaration"
        | "expression_case" | "type_case" | "communication_case" | "default_case" => {
            NodeClass::Statement
        }
        k if k.ends_with("_statement") => NodeClass::Statement,
        "identifier" | "field_identifier" | "package_identifier" | "int_literal"
        | "float_literal" | "imaginary_literal" | "rune_literal" | "interpreted_string_literal"
        | "raw_string_literal" | "true" | "false" | "nil" | "iota" | "call_expression"
        | "selector_expression" | "index_expression" | "slice_expression" | "binary_expression"
        | "unary_expression" | "parenthesized_expression" | "type_assertion_expression"
        | "type_conversion_expression" | "composite_literal" | "func_literal"
        | "variadic_argument" => NodeClass::Expression,
        // Types in expression position: the composite-literal type, the
        // type operand of make/new and conversions. Go models these as
        // expressions, so they carry weight like any other expression.
        "type_identifier" | "qualified_type" | "map_type" | "slice_type" | "array_type"
        | "implicit_length_array_type" | "pointer_type" | "function_type" | "channel_type"
        | "struct_type" | "interface_type" | "generic_type" => NodeClass::Expression,
        _ => NodeClass::Other,
    }
}

/// Count the structural nodes of a function body.
pub fn count_nodes(body: Node) -> usize {
    let mut count = 0;
    visit(body, &mut count);
    count
}

fn visit(node: Node, count: &mut usize) {
    match classify(node.kind()) {
        NodeClass::Grouping | NodeClass::Other => {}
        NodeClass::KeyedEntry => {
            // Only the value carries weight; the key subtree is never
            // visited, so its complexity cannot leak into the metric.
            if let Some(value) = keyed_value(node) {
                visit(value, count);
            }
            return;
        }
        NodeClass::Statement | NodeClass::Expression => {
            *count += 1;
            // A nested literal is one expression here; its internals
            // belong exclusively to the literal's own record.
            if node.kind() == "func_literal" {
                return;
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit(child, count);
    }
}

fn keyed_value(node: Node) -> Option<Node> {
    // The grammar labels key/value fields; fall back to the last named
    // child, which is the value in every complete keyed_element.
    node.child_by_field_name("value").or_else(|| {
        let n = node.named_child_count();
        if n > 0 {
            node.named_child(n - 1)
        } else {
            None
        }
    })
}
