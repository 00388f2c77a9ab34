use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{children, field_text, first_child_of_kind, node_text, symbol_at};
use crate::symbols::{FileApi, SymbolKind};

/// Node kinds for top-level declarations across the two Zig grammars in
/// circulation (the PEG-derived one and tree-sitter-grammars/tree-sitter-zig).
const DECL_KINDS: &[&str] = &[
    "TopLevelDecl",
    "FnProto",
    "VarDecl",
    "function_declaration",
    "variable_declaration",
];

const IDENTIFIER_KINDS: &[&str] = &["identifier", "IDENTIFIER"];

/// Declarations whose text starts with `pub `. No doc comments.
pub struct ZigExtractor;

impl LanguageExtractor for ZigExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        for node in children(root) {
            if !DECL_KINDS.contains(&node.kind()) {
                continue;
            }
            if !node_text(&node, source).starts_with("pub ") {
                continue;
            }
            let kind = if is_variable(node.kind()) {
                SymbolKind::Const
            } else {
                SymbolKind::Function
            };
            let mut name = field_text(&node, "name", source);
            if name.is_empty() {
                if let Some(ident) = first_child_of_kind(&node, IDENTIFIER_KINDS) {
                    name = node_text(&ident, source).into_owned();
                }
            }
            api.symbols.push(symbol_at(kind, name, &node, source));
        }
    }
}

fn is_variable(kind: &str) -> bool {
    kind.contains("Var") || kind.contains("variable")
}
