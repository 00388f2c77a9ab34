use std::borrow::Cow;
use tree_sitter::Node;

use crate::symbols::{Symbol, SymbolKind};

const COMMENT_KINDS: &[&str] = &[
    "comment",
    "line_comment",
    "block_comment",
    "doc_comment",
    // gleam `///`
    "statement_comment",
];

pub(crate) fn node_text<'s>(node: &Node, source: &'s [u8]) -> Cow<'s, str> {
    let end = node.end_byte().min(source.len());
    let start = node.start_byte().min(end);
    String::from_utf8_lossy(&source[start..end])
}

/// Text of the child at `field`, or an empty string.
pub(crate) fn field_text(node: &Node, field: &str, source: &[u8]) -> String {
    node.child_by_field_name(field)
        .map(|child| node_text(&child, source).into_owned())
        .unwrap_or_default()
}

/// First line of the node's text, whitespace-trimmed.
pub(crate) fn signature_line(node: &Node, source: &[u8]) -> String {
    let text = node_text(node, source);
    text.lines().next().unwrap_or_default().trim().to_string()
}

/// Comment sibling immediately before `node`, trimmed. Only the nearest
/// comment node counts; a run of `//` lines yields just the last one.
pub(crate) fn preceding_comment(node: &Node, source: &[u8]) -> Option<String> {
    let prev = node.prev_sibling()?;
    if COMMENT_KINDS.contains(&prev.kind()) {
        Some(node_text(&prev, source).trim().to_string())
    } else {
        None
    }
}

pub(crate) fn first_child_of_kind<'t>(node: &Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|child| kinds.contains(&child.kind()))
}

pub(crate) fn has_child_of_kind(node: &Node, kind: &str) -> bool {
    first_child_of_kind(node, &[kind]).is_some()
}

pub(crate) fn children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

/// Visit every node under `root`, depth-first, pre-order.
pub(crate) fn walk_all<'t>(root: &Node<'t>, mut visit: impl FnMut(&Node<'t>)) {
    let mut cursor = root.walk();
    loop {
        visit(&cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Go-style export rule: first byte is an ASCII capital letter.
pub(crate) fn is_capitalized(name: &str) -> bool {
    name.bytes().next().is_some_and(|b| b.is_ascii_uppercase())
}

/// Python and Mojo private-name rule.
pub(crate) fn is_private_name(name: &str) -> bool {
    name.starts_with('_')
}

/// Docstring text: surrounding quote characters stripped, then whitespace.
pub(crate) fn clean_docstring(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '\'').trim().to_string()
}

/// Build a symbol whose signature and line come from `node`.
pub(crate) fn symbol_at(kind: SymbolKind, name: impl Into<String>, node: &Node, source: &[u8]) -> Symbol {
    Symbol {
        kind,
        name: name.into(),
        signature: signature_line(node, source),
        doc_string: None,
        line: node.start_position().row + 1,
    }
}
