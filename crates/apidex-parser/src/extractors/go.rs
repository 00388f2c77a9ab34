use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{children, field_text, is_capitalized, preceding_comment, symbol_at};
use crate::symbols::{FileApi, Symbol, SymbolKind};

/// Exported means capitalized. Doc comments are read for funcs, methods and
/// types; const and var specs never carry one.
pub struct GoExtractor;

impl LanguageExtractor for GoExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        for node in children(root) {
            match node.kind() {
                "function_declaration" | "method_declaration" => {
                    let name = field_text(&node, "name", source);
                    if !is_capitalized(&name) {
                        continue;
                    }
                    let kind = if node.kind() == "method_declaration" {
                        SymbolKind::Method
                    } else {
                        SymbolKind::Function
                    };
                    api.symbols.push(Symbol {
                        doc_string: preceding_comment(&node, source),
                        ..symbol_at(kind, name, &node, source)
                    });
                }
                "type_declaration" => extract_types(&node, source, api),
                "const_declaration" => extract_specs(&node, SymbolKind::Const, source, api),
                "var_declaration" => extract_specs(&node, SymbolKind::Var, source, api),
                _ => {}
            }
        }
    }
}

fn extract_types(decl: &Node, source: &[u8], api: &mut FileApi) {
    let doc = preceding_comment(decl, source);
    for spec in children(decl) {
        if spec.kind() != "type_spec" && spec.kind() != "type_alias" {
            continue;
        }
        let name = field_text(&spec, "name", source);
        if !is_capitalized(&name) {
            continue;
        }
        let kind = match spec.child_by_field_name("type").map(|t| t.kind()) {
            Some("struct_type") => SymbolKind::Struct,
            Some("interface_type") => SymbolKind::Interface,
            _ => SymbolKind::Type,
        };
        api.symbols.push(Symbol {
            doc_string: doc.clone(),
            ..symbol_at(kind, name, &spec, source)
        });
    }
}

fn extract_specs(decl: &Node, kind: SymbolKind, source: &[u8], api: &mut FileApi) {
    for child in children(decl) {
        match child.kind() {
            "const_spec" | "var_spec" => push_spec(&child, kind, source, api),
            // var ( ... ) groups wrap their specs in a list node
            "var_spec_list" => {
                for spec in children(&child) {
                    if spec.kind() == "var_spec" {
                        push_spec(&spec, kind, source, api);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_spec(spec: &Node, kind: SymbolKind, source: &[u8], api: &mut FileApi) {
    let name = field_text(spec, "name", source);
    if is_capitalized(&name) {
        api.symbols.push(symbol_at(kind, name, spec, source));
    }
}
