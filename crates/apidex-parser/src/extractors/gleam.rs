use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{
    children, first_child_of_kind, has_child_of_kind, node_text, preceding_comment, symbol_at,
};
use crate::symbols::{FileApi, Symbol, SymbolKind};

/// `pub` functions, types and constants.
pub struct GleamExtractor;

impl LanguageExtractor for GleamExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        for node in children(root) {
            if !has_child_of_kind(&node, "visibility_modifier") {
                continue;
            }
            let symbol = match node.kind() {
                "function" => Symbol {
                    doc_string: preceding_comment(&node, source),
                    ..symbol_at(SymbolKind::Function, identifier(&node, source), &node, source)
                },
                "type_definition" => Symbol {
                    doc_string: preceding_comment(&node, source),
                    ..symbol_at(SymbolKind::Type, type_name(&node, source), &node, source)
                },
                "constant" => symbol_at(SymbolKind::Const, identifier(&node, source), &node, source),
                _ => continue,
            };
            api.symbols.push(symbol);
        }
    }
}

fn identifier(node: &Node, source: &[u8]) -> String {
    first_child_of_kind(node, &["identifier"])
        .map(|ident| node_text(&ident, source).into_owned())
        .unwrap_or_default()
}

fn type_name(node: &Node, source: &[u8]) -> String {
    first_child_of_kind(node, &["type_name"])
        .and_then(|name| first_child_of_kind(&name, &["type_identifier"]))
        .map(|ident| node_text(&ident, source).into_owned())
        .unwrap_or_default()
}
