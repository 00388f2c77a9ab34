use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{children, field_text, has_child_of_kind, preceding_comment, symbol_at};
use crate::symbols::{FileApi, Symbol, SymbolKind};

/// Top-level items carrying any visibility modifier (`pub`, `pub(crate)`...).
pub struct RustExtractor;

impl LanguageExtractor for RustExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        for node in children(root) {
            if !has_child_of_kind(&node, "visibility_modifier") {
                continue;
            }
            let (kind, documented) = match node.kind() {
                "function_item" => (SymbolKind::Function, true),
                "struct_item" => (SymbolKind::Struct, true),
                "enum_item" => (SymbolKind::Enum, true),
                "trait_item" => (SymbolKind::Trait, true),
                "type_item" => (SymbolKind::Type, false),
                "const_item" | "static_item" => (SymbolKind::Const, false),
                _ => continue,
            };
            let name = field_text(&node, "name", source);
            let doc_string = if documented {
                preceding_comment(&node, source)
            } else {
                None
            };
            api.symbols.push(Symbol {
                doc_string,
                ..symbol_at(kind, name, &node, source)
            });
        }
    }
}
