use std::path::PathBuf;

/// A parsed Go source file.
///
/// The tree is position-annotated and keeps comments as named nodes,
/// which the directive detector relies on. The source text is retained
/// because tree-sitter nodes only carry byte ranges.
#[derive(Clone, Debug)]
pub struct GoAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
}

impl GoAst {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}
