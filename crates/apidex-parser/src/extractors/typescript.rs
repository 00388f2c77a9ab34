use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{children, field_text, symbol_at};
use crate::symbols::{FileApi, SymbolKind};

/// JavaScript, TypeScript and TSX share one rule set.
///
/// Both `export`ed and plain top-level declarations are captured: in scripts
/// and component blocks a top-level binding is the module's surface. No doc
/// comments are attached.
pub struct TypeScriptExtractor;

impl LanguageExtractor for TypeScriptExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        for node in children(root) {
            if node.kind() == "export_statement" {
                for child in children(&node) {
                    push_declaration(&child, source, api);
                }
            } else {
                push_declaration(&node, source, api);
            }
        }
    }
}

fn push_declaration(node: &Node, source: &[u8], api: &mut FileApi) {
    let kind = match node.kind() {
        "function_declaration" => SymbolKind::Function,
        "class_declaration" => SymbolKind::Class,
        "interface_declaration" => SymbolKind::Interface,
        "type_alias_declaration" => SymbolKind::Type,
        "enum_declaration" => SymbolKind::Enum,
        "lexical_declaration" | "variable_declaration" => {
            // one symbol per declarator, all sharing the statement's header
            for declarator in children(node) {
                if declarator.kind() == "variable_declarator" {
                    let name = field_text(&declarator, "name", source);
                    api.symbols.push(symbol_at(SymbolKind::Const, name, node, source));
                }
            }
            return;
        }
        _ => return,
    };
    let name = field_text(node, "name", source);
    api.symbols.push(symbol_at(kind, name, node, source));
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{extract, names};
    use crate::language::Language;
    use crate::symbols::SymbolKind;

    const TS_SOURCE: &str = r#"import { x } from "./x";

export interface User {
  id: number;
}

export type ID = string;

export enum Color {
  Red,
}

export function greet(user: User): string {
  return `hi ${user.id}`;
}

export class Service {
  run() {}
}

export const A = 1, B = 2;

function local() {}

let counter = 0;
"#;

    #[test]
    fn test_typescript_declarations() {
        let symbols = extract(TS_SOURCE, Language::TypeScript);
        assert_eq!(
            names(&symbols),
            vec!["User", "ID", "Color", "greet", "Service", "A", "B", "local", "counter"]
        );

        let find = |name: &str| symbols.iter().find(|s| s.name == name).unwrap();
        assert_eq!(find("User").kind, SymbolKind::Interface);
        assert_eq!(find("ID").kind, SymbolKind::Type);
        assert_eq!(find("Color").kind, SymbolKind::Enum);
        assert_eq!(find("Service").kind, SymbolKind::Class);
        assert_eq!(find("counter").kind, SymbolKind::Const);

        let greet = find("greet");
        assert_eq!(greet.kind, SymbolKind::Function);
        assert_eq!(greet.signature, "function greet(user: User): string {");
        assert_eq!(greet.line, 13);
        assert_eq!(greet.doc_string, None);
    }

    #[test]
    fn test_multiple_declarators_share_statement() {
        let symbols = extract(TS_SOURCE, Language::TypeScript);
        let a = symbols.iter().find(|s| s.name == "A").unwrap();
        let b = symbols.iter().find(|s| s.name == "B").unwrap();
        assert_eq!(a.signature, "const A = 1, B = 2;");
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.line, b.line);
        assert_eq!(a.kind, SymbolKind::Const);
    }

    #[test]
    fn test_javascript_uses_same_rules() {
        let source = "export function add(a, b) {\n  return a + b;\n}\n\nvar legacy = true;\n\nclass Widget {}\n";
        let symbols = extract(source, Language::JavaScript);
        assert_eq!(names(&symbols), vec!["add", "legacy", "Widget"]);
        assert_eq!(symbols[1].kind, SymbolKind::Const);
        assert_eq!(symbols[2].line, 7);
    }

    #[test]
    fn test_tsx_component() {
        let source = "export const Button = () => <button>ok</button>;\n";
        let symbols = extract(source, Language::Tsx);
        assert_eq!(names(&symbols), vec!["Button"]);
        assert_eq!(symbols[0].signature, "const Button = () => <button>ok</button>;");
    }
}
