use std::path::Path;
use tracing::debug;
use tree_sitter::Tree;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::grammar;
use crate::language::{Language, detect_language};

/// Thin wrapper around a tree-sitter parser.
///
/// One `Parser` serves every language: the grammar is set per call. It is
/// not meant to be shared between threads; create one per worker.
pub struct Parser {
    inner: tree_sitter::Parser,
    config: ParserConfig,
}

impl Parser {
    /// Parser configured from the environment (`APIDEX_GRAMMAR_PATH`).
    pub fn new() -> Self {
        Self::with_config(ParserConfig::from_env())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            inner: tree_sitter::Parser::new(),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `source` with the grammar for `language`. Syntax errors do not
    /// fail the parse; they show up as error nodes in the tree.
    pub fn parse(&mut self, source: impl AsRef<[u8]>, language: Language) -> Result<Tree, ParseError> {
        let source = source.as_ref();
        let grammar = grammar::resolve(language, &self.config)?;
        self.inner
            .set_language(&grammar)
            .map_err(|e| ParseError::grammar_init(language, e))?;

        let tree = self
            .inner
            .parse(source, None)
            .ok_or(ParseError::EmptyParseResult(language))?;

        debug!(
            "Parsed {} bytes of {} ({} error nodes)",
            source.len(),
            language,
            if tree.root_node().has_error() { "with" } else { "no" }
        );
        Ok(tree)
    }

    /// Detect the language from `path` and parse `source` with it.
    pub fn parse_file(
        &mut self,
        source: impl AsRef<[u8]>,
        path: impl AsRef<Path>,
    ) -> Result<(Tree, Language), ParseError> {
        let path = path.as_ref();
        let language =
            detect_language(path).ok_or_else(|| ParseError::UndetectedLanguage(path.to_path_buf()))?;
        let tree = self.parse(source, language)?;
        Ok((tree, language))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
