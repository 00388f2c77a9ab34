use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{
    children, clean_docstring, field_text, first_child_of_kind, is_private_name, node_text,
    symbol_at,
};
use crate::symbols::{FileApi, Symbol, SymbolKind};

/// Mojo follows the Python rules: `fn` and `def` are both
/// `function_definition`, a `struct` is a `class_definition` whose first
/// token is `struct`.
pub struct MojoExtractor;

impl LanguageExtractor for MojoExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        for node in children(root) {
            match node.kind() {
                "function_definition" => {
                    let name = definition_name(&node, source);
                    if is_private_name(&name) {
                        continue;
                    }
                    api.symbols.push(Symbol {
                        doc_string: docstring(&node, source),
                        ..symbol_at(SymbolKind::Function, name, &node, source)
                    });
                }
                "class_definition" => {
                    let name = definition_name(&node, source);
                    if is_private_name(&name) {
                        continue;
                    }
                    let kind = match node.child(0) {
                        Some(keyword) if keyword.kind() == "struct" => SymbolKind::Struct,
                        _ => SymbolKind::Class,
                    };
                    api.symbols.push(symbol_at(kind, name, &node, source));
                }
                "trait_definition" => {
                    let name = definition_name(&node, source);
                    api.symbols.push(symbol_at(SymbolKind::Trait, name, &node, source));
                }
                _ => {}
            }
        }
    }
}

fn definition_name(node: &Node, source: &[u8]) -> String {
    let name = field_text(node, "name", source);
    if !name.is_empty() {
        return name;
    }
    first_child_of_kind(node, &["identifier"])
        .map(|ident| node_text(&ident, source).into_owned())
        .unwrap_or_default()
}

/// First statement of the `block` child, either a bare string or an
/// expression statement wrapping one.
fn docstring(node: &Node, source: &[u8]) -> Option<String> {
    let block = first_child_of_kind(node, &["block"])?;
    let first = block.child(0)?;
    match first.kind() {
        "string" => Some(strip_triple_quotes(&node_text(&first, source))),
        "expression_statement" => {
            let expr = first.child(0)?;
            matches!(expr.kind(), "string" | "concatenated_string")
                .then(|| clean_docstring(&node_text(&expr, source)))
        }
        _ => None,
    }
}

fn strip_triple_quotes(text: &str) -> String {
    let text = text.strip_prefix("\"\"\"").unwrap_or(text);
    let text = text.strip_suffix("\"\"\"").unwrap_or(text);
    let text = text.strip_prefix("'''").unwrap_or(text);
    let text = text.strip_suffix("'''").unwrap_or(text);
    text.trim().to_string()
}
