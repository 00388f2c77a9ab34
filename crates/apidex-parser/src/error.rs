use std::path::PathBuf;
use thiserror::Error;

use crate::language::Language;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("could not detect language for {}", .0.display())]
    UndetectedLanguage(PathBuf),

    #[error("failed to initialize {language} grammar: {reason}")]
    GrammarInitFailed { language: Language, reason: String },

    #[error("tree-sitter produced no tree for {0} source")]
    EmptyParseResult(Language),
}

impl ParseError {
    pub(crate) fn grammar_init(language: Language, reason: impl ToString) -> Self {
        ParseError::GrammarInitFailed {
            language,
            reason: reason.to_string(),
        }
    }
}
