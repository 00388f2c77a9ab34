//! Public API extraction for multi-language source trees.
//!
//! A source file is parsed with tree-sitter and walked by a per-language
//! extractor that keeps only exported declarations. The results render into
//! a compact text index meant to be pasted into prompts or read by people.

pub mod api;
pub mod config;
pub mod embedded;
pub mod error;
pub mod extractors;
pub mod format;
pub mod grammar;
pub mod language;
pub mod parser;
pub mod symbols;

pub use api::{ApiExtractor, extract_api};
pub use config::{GRAMMAR_PATH_ENV, ParserConfig};
pub use embedded::extract_embedded;
pub use error::ParseError;
pub use format::format_api_index;
pub use language::{Language, detect_language, supported_languages};
pub use parser::Parser;
pub use symbols::{FileApi, Symbol, SymbolKind};
