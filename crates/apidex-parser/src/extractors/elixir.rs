use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{node_text, preceding_comment, signature_line, symbol_at, walk_all};
use crate::symbols::{FileApi, Symbol, SymbolKind};

/// `def`, `defmacro` and `defmodule` calls anywhere in the tree. Definitions
/// live inside `defmodule ... do` blocks, so the whole tree is walked.
pub struct ElixirExtractor;

impl LanguageExtractor for ElixirExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        walk_all(root, |node| {
            if node.kind() != "call" {
                return;
            }
            let Some(target) = node.child(0) else {
                return;
            };
            let callee = node_text(&target, source);
            let kind = match callee.as_ref() {
                "defmodule" => SymbolKind::Module,
                "def" | "defmacro" => SymbolKind::Function,
                _ => return,
            };
            let name = match node.child(1) {
                Some(args) => signature_line(&args, source),
                None => callee.into_owned(),
            };
            api.symbols.push(Symbol {
                doc_string: preceding_comment(node, source),
                ..symbol_at(kind, name, node, source)
            });
        });
    }
}
