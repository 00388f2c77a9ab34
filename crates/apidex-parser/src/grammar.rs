//! Grammar registry.
//!
//! Most grammars are compiled into the crate. Mojo has no grammar crate on
//! crates.io, so it is loaded on demand from a shared library
//! (`libtree-sitter-mojo.so` or `mojo.so`) found in one of the configured
//! grammar directories. Loaded libraries are kept for the life of
//! the process; a `tree_sitter::Language` must never outlive its code.

use libloading::Library;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing::debug;
use tree_sitter_language::LanguageFn;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::language::Language;

/// Where the grammar for a language comes from.
#[derive(Clone, Copy)]
pub enum GrammarSource {
    Bundled(LanguageFn),
    /// Loaded at runtime; the value is the grammar name used for both the
    /// library file and the `tree_sitter_<name>` entry point.
    Runtime(&'static str),
}

pub fn grammar_source(language: Language) -> GrammarSource {
    match language {
        Language::Go => GrammarSource::Bundled(tree_sitter_go::LANGUAGE),
        Language::Rust => GrammarSource::Bundled(tree_sitter_rust::LANGUAGE),
        Language::JavaScript => GrammarSource::Bundled(tree_sitter_javascript::LANGUAGE),
        Language::TypeScript => {
            GrammarSource::Bundled(tree_sitter_typescript::LANGUAGE_TYPESCRIPT)
        }
        Language::Tsx => GrammarSource::Bundled(tree_sitter_typescript::LANGUAGE_TSX),
        Language::Python => GrammarSource::Bundled(tree_sitter_python::LANGUAGE),
        Language::Elixir => GrammarSource::Bundled(tree_sitter_elixir::LANGUAGE),
        Language::Json => GrammarSource::Bundled(tree_sitter_json::LANGUAGE),
        Language::Css => GrammarSource::Bundled(tree_sitter_css::LANGUAGE),
        Language::Toml => GrammarSource::Bundled(tree_sitter_toml_ng::LANGUAGE),
        // Script blocks come out as script_element/raw_text, which is all
        // the Svelte extractor reads.
        Language::Svelte => GrammarSource::Bundled(tree_sitter_html::LANGUAGE),
        // Astro frontmatter is located in the raw text; the HTML tree only
        // keeps parsing uniform across languages and is not read.
        Language::Astro => GrammarSource::Bundled(tree_sitter_html::LANGUAGE),
        Language::Markdown => GrammarSource::Bundled(tree_sitter_md::LANGUAGE),
        Language::Zig => GrammarSource::Bundled(tree_sitter_zig::LANGUAGE),
        Language::Gleam => GrammarSource::Bundled(tree_sitter_gleam::LANGUAGE),
        Language::Mojo => GrammarSource::Runtime("mojo"),
    }
}

/// Resolve the tree-sitter grammar for `language`.
///
/// A runtime grammar whose library is not found in any configured directory
/// is reported as `UnsupportedLanguage`; a library that is found but cannot
/// be loaded, or lacks the entry point, is `GrammarInitFailed`.
pub fn resolve(
    language: Language,
    config: &ParserConfig,
) -> Result<tree_sitter::Language, ParseError> {
    match grammar_source(language) {
        GrammarSource::Bundled(language_fn) => Ok(language_fn.into()),
        GrammarSource::Runtime(name) => {
            let path = find_library(name, &config.grammar_dirs).ok_or_else(|| {
                ParseError::UnsupportedLanguage(format!(
                    "{} (no {} grammar library in {} configured director{})",
                    language,
                    name,
                    config.grammar_dirs.len(),
                    if config.grammar_dirs.len() == 1 { "y" } else { "ies" }
                ))
            })?;
            let language_fn = load_library(language, name, &path)?;
            Ok(tree_sitter::Language::new(language_fn))
        }
    }
}

/// Whether `language` can be parsed under `config`, without loading anything.
pub fn is_available(language: Language, config: &ParserConfig) -> bool {
    match grammar_source(language) {
        GrammarSource::Bundled(_) => true,
        GrammarSource::Runtime(name) => find_library(name, &config.grammar_dirs).is_some(),
    }
}

/// Candidate library file names for a grammar on this platform.
pub fn library_file_names(name: &str) -> Vec<String> {
    let (prefix, ext) = if cfg!(target_os = "windows") {
        ("", "dll")
    } else if cfg!(target_os = "macos") {
        ("lib", "dylib")
    } else {
        ("lib", "so")
    };
    vec![
        format!("{}tree-sitter-{}.{}", prefix, name, ext),
        format!("{}.{}", name, ext),
    ]
}

fn find_library(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let file_names = library_file_names(name);
    dirs.iter()
        .flat_map(|dir| file_names.iter().map(move |file| dir.join(file)))
        .find(|candidate| candidate.is_file())
}

struct LoadedGrammar {
    _library: Library,
    language_fn: LanguageFn,
}

fn loaded_grammars() -> &'static Mutex<HashMap<PathBuf, LoadedGrammar>> {
    static LOADED: OnceLock<Mutex<HashMap<PathBuf, LoadedGrammar>>> = OnceLock::new();
    LOADED.get_or_init(|| Mutex::new(HashMap::new()))
}

fn load_library(language: Language, name: &str, path: &Path) -> Result<LanguageFn, ParseError> {
    let mut loaded = loaded_grammars()
        .lock()
        .map_err(|_| ParseError::grammar_init(language, "grammar cache lock poisoned"))?;

    if let Some(grammar) = loaded.get(path) {
        return Ok(grammar.language_fn);
    }

    debug!("Loading {} grammar from {}", language, path.display());

    // SAFETY: the library is a tree-sitter grammar found in a directory the
    // caller configured; its initialisers are trusted like any bundled grammar.
    let library = unsafe { Library::new(path) }
        .map_err(|e| ParseError::grammar_init(language, format!("{}: {}", path.display(), e)))?;

    let symbol = format!("tree_sitter_{}", name);
    // SAFETY: tree-sitter grammars export `const TSLanguage *tree_sitter_<name>(void)`.
    // The pointer is copied out of the symbol and stays valid because the
    // library is stored alongside it and never unloaded.
    let raw = unsafe {
        library
            .get::<unsafe extern "C" fn() -> *const ()>(symbol.as_bytes())
            .map(|entry| *entry)
    }
    .map_err(|e| ParseError::grammar_init(language, format!("missing {}: {}", symbol, e)))?;

    let language_fn = unsafe { LanguageFn::from_raw(raw) };
    loaded.insert(
        path.to_path_buf(),
        LoadedGrammar {
            _library: library,
            language_fn,
        },
    );
    Ok(language_fn)
}
