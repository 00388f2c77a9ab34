use tree_sitter::Node;

use super::LanguageExtractor;
use crate::embedded::extract_embedded;
use crate::symbols::FileApi;

const FENCE: &str = "---";

/// Symbols from the `---` fenced frontmatter script.
///
/// The fence is located in the raw text rather than the tree: the HTML
/// grammar the file is parsed with has no notion of frontmatter.
pub struct AstroExtractor;

impl LanguageExtractor for AstroExtractor {
    fn extract(&self, _root: &Node, source: &[u8], api: &mut FileApi) {
        let text = String::from_utf8_lossy(source);
        if let Some((offset, code)) = frontmatter(&text) {
            api.symbols.extend(extract_embedded(code, offset));
        }
    }
}

/// Locate the frontmatter block: the first non-blank line must be `---`,
/// and the block runs to the next line that is exactly `---` (surrounding
/// whitespace ignored). Returns the 0-based row of the first content line
/// and the content between the fences. An unterminated fence yields `None`.
fn frontmatter(text: &str) -> Option<(usize, &str)> {
    let mut lines = text.split_inclusive('\n');
    let mut consumed = 0;
    let mut row = 0;

    loop {
        let line = lines.next()?;
        consumed += line.len();
        let trimmed = line.trim();
        if trimmed.is_empty() {
            row += 1;
            continue;
        }
        if trimmed != FENCE {
            return None;
        }
        break;
    }

    let start = consumed;
    for line in lines {
        if line.trim() == FENCE {
            return Some((row + 1, &text[start..consumed]));
        }
        consumed += line.len();
    }
    None
}
