//! Script blocks embedded in component files.

use tracing::debug;

use crate::config::ParserConfig;
use crate::extractors::{LanguageExtractor, TypeScriptExtractor};
use crate::language::Language;
use crate::parser::Parser;
use crate::symbols::{FileApi, Symbol};

/// Extract symbols from a script block embedded in a host document.
///
/// The block is parsed as TypeScript, which also accepts plain JavaScript.
/// `line_offset` is the 0-based host row where `code` begins; every symbol
/// line is shifted by it so it points into the host document. Failures yield
/// no symbols.
pub fn extract_embedded(code: &str, line_offset: usize) -> Vec<Symbol> {
    let mut parser = Parser::with_config(ParserConfig::new());
    let tree = match parser.parse(code, Language::TypeScript) {
        Ok(tree) => tree,
        Err(e) => {
            debug!("Skipping embedded script block: {}", e);
            return Vec::new();
        }
    };

    let mut scratch = FileApi::new(Language::TypeScript);
    TypeScriptExtractor.extract(&tree.root_node(), code.as_bytes(), &mut scratch);

    scratch
        .symbols
        .into_iter()
        .map(|mut symbol| {
            symbol.line += line_offset;
            symbol
        })
        .collect()
}
