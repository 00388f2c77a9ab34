use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{children, clean_docstring, field_text, is_private_name, node_text, symbol_at};
use crate::symbols::{FileApi, Symbol, SymbolKind};

pub struct PythonExtractor;

impl LanguageExtractor for PythonExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        for node in children(root) {
            match node.kind() {
                "function_definition" | "class_definition" => push_definition(&node, source, api),
                "decorated_definition" => {
                    for child in children(&node) {
                        if matches!(child.kind(), "function_definition" | "class_definition") {
                            push_definition(&child, source, api);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn push_definition(node: &Node, source: &[u8], api: &mut FileApi) {
    let name = field_text(node, "name", source);
    if is_private_name(&name) {
        return;
    }
    let kind = if node.kind() == "class_definition" {
        SymbolKind::Class
    } else {
        SymbolKind::Function
    };
    api.symbols.push(Symbol {
        doc_string: docstring(node, source),
        ..symbol_at(kind, name, node, source)
    });
}

/// A string literal as the first statement of the body.
fn docstring(node: &Node, source: &[u8]) -> Option<String> {
    let body = node.child_by_field_name("body")?;
    let first = body.child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.child(0)?;
    if !matches!(expr.kind(), "string" | "concatenated_string") {
        return None;
    }
    Some(clean_docstring(&node_text(&expr, source)))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{extract, names};
    use crate::language::Language;
    use crate::symbols::SymbolKind;

    const SOURCE: &str = r#"import os


def process(data, limit=10):
    """Process the incoming data."""
    return data


def _private():
    pass


class Pipeline:
    """
    A processing pipeline.
    """

    def run(self):
        pass


class _Hidden:
    pass


@dataclass
class Settings:
    name: str


@cached
def compute():
    '''Compute once.'''
    return 1


@cached
def _memo():
    return 2


@dataclass
class _Internal:
    pass
"#;

    #[test]
    fn test_python_public_definitions() {
        let symbols = extract(SOURCE, Language::Python);
        assert_eq!(names(&symbols), vec!["process", "Pipeline", "Settings", "compute"]);
    }

    #[test]
    fn test_python_docstrings_and_kinds() {
        let symbols = extract(SOURCE, Language::Python);
        let find = |name: &str| symbols.iter().find(|s| s.name == name).unwrap();

        let process = find("process");
        assert_eq!(process.kind, SymbolKind::Function);
        assert_eq!(process.signature, "def process(data, limit=10):");
        assert_eq!(process.doc_string.as_deref(), Some("Process the incoming data."));
        assert_eq!(process.line, 4);

        let pipeline = find("Pipeline");
        assert_eq!(pipeline.kind, SymbolKind::Class);
        assert_eq!(pipeline.doc_string.as_deref(), Some("A processing pipeline."));

        let settings = find("Settings");
        assert_eq!(settings.kind, SymbolKind::Class);
        assert_eq!(settings.doc_string, None);
        assert_eq!(settings.signature, "class Settings:");
        assert_eq!(settings.line, 27);

        let compute = find("compute");
        assert_eq!(compute.kind, SymbolKind::Function);
        assert_eq!(compute.doc_string.as_deref(), Some("Compute once."));
    }

    #[test]
    fn test_python_decorated_private_definitions_are_dropped() {
        let symbols = extract(SOURCE, Language::Python);
        let found = names(&symbols);
        assert!(!found.contains(&"_memo"));
        assert!(!found.contains(&"_Internal"));
        assert_eq!(found.last(), Some(&"compute"));
    }

    #[test]
    fn test_python_methods_are_not_top_level() {
        let symbols = extract(SOURCE, Language::Python);
        assert!(symbols.iter().all(|s| s.name != "run"));
    }
}
