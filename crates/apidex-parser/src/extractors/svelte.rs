use tree_sitter::Node;

use super::LanguageExtractor;
use super::helpers::{children, node_text, walk_all};
use crate::embedded::extract_embedded;
use crate::symbols::FileApi;

/// Symbols from every `<script>` block, lines mapped back to the component.
pub struct SvelteExtractor;

impl LanguageExtractor for SvelteExtractor {
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi) {
        walk_all(root, |node| {
            if node.kind() != "script_element" {
                return;
            }
            for child in children(node) {
                if child.kind() == "raw_text" {
                    let code = node_text(&child, source);
                    let offset = child.start_position().row;
                    api.symbols.extend(extract_embedded(&code, offset));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{extract, names};
    use crate::language::Language;
    use crate::symbols::SymbolKind;

    const SOURCE: &str = r#"<script lang="ts">
  import { onMount } from "svelte";

  export let name: string;

  export function greet(): string {
    return "Hello " + name;
  }
</script>

<h1>Hello {name}!</h1>

<style>
  h1 { color: red; }
</style>
"#;

    #[test]
    fn test_svelte_script_symbols() {
        let symbols = extract(SOURCE, Language::Svelte);
        assert_eq!(names(&symbols), vec!["name", "greet"]);
        assert_eq!(symbols[0].kind, SymbolKind::Const);
        assert_eq!(symbols[1].kind, SymbolKind::Function);
    }

    #[test]
    fn test_svelte_lines_point_into_component() {
        let symbols = extract(SOURCE, Language::Svelte);
        let greet = symbols.iter().find(|s| s.name == "greet").unwrap();
        assert_eq!(greet.line, 6);
        assert_eq!(greet.signature, "function greet(): string {");

        let source_lines: Vec<&str> = SOURCE.lines().collect();
        assert!(source_lines[greet.line - 1].contains("function greet"));
    }

    #[test]
    fn test_svelte_multiple_script_blocks() {
        let source = "<script context=\"module\">\n  export const prerender = true;\n</script>\n\n<script>\n  let count = 0;\n</script>\n";
        let symbols = extract(source, Language::Svelte);
        assert_eq!(names(&symbols), vec!["prerender", "count"]);
        assert_eq!(symbols[0].line, 2);
        assert_eq!(symbols[1].line, 6);
    }

    #[test]
    fn test_svelte_markup_only() {
        let symbols = extract("<div>static</div>\n", Language::Svelte);
        assert!(symbols.is_empty());
    }
}
