use std::path::Path;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::extractors::extractor_for;
use crate::language::{Language, detect_language};
use crate::parser::Parser;
use crate::symbols::FileApi;

/// Parses sources and runs the matching language extractor.
///
/// Each call uses its own tree-sitter parser, so one extractor can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct ApiExtractor {
    config: ParserConfig,
}

impl ApiExtractor {
    /// Extractor configured from the environment (`APIDEX_GRAMMAR_PATH`).
    pub fn new() -> Self {
        Self::with_config(ParserConfig::from_env())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Extract the public API of `source`. The result has no path set.
    pub fn extract(&self, source: impl AsRef<[u8]>, language: Language) -> Result<FileApi, ParseError> {
        let source = source.as_ref();
        let mut parser = Parser::with_config(self.config.clone());
        let tree = parser.parse(source, language)?;

        let mut api = FileApi::new(language);
        extractor_for(language).extract(&tree.root_node(), source, &mut api);

        debug!("Extracted {} symbols from {} source", api.symbols.len(), language);
        Ok(api)
    }

    /// Detect the language from `path`, extract, and record the path.
    pub fn extract_file(&self, source: impl AsRef<[u8]>, path: impl AsRef<Path>) -> Result<FileApi, ParseError> {
        let path = path.as_ref();
        let language =
            detect_language(path).ok_or_else(|| ParseError::UndetectedLanguage(path.to_path_buf()))?;
        let api = self.extract(source, language)?;
        Ok(api.with_path(path.to_string_lossy()))
    }
}

impl Default for ApiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the public API of `source` using an environment-configured parser.
pub fn extract_api(source: impl AsRef<[u8]>, language: Language) -> Result<FileApi, ParseError> {
    ApiExtractor::new().extract(source, language)
}
