//! Per-language public API rules.
//!
//! Each extractor looks at the direct children of the root node only, except
//! where a language hides its declarations deeper (Elixir `defmodule` bodies,
//! Svelte script blocks). Symbols are pushed in source order.

mod astro;
mod elixir;
mod gleam;
mod go;
pub(crate) mod helpers;
mod mojo;
mod python;
mod rust_lang;
mod svelte;
mod typescript;
mod zig;

use tree_sitter::Node;

use crate::language::Language;
use crate::symbols::FileApi;

pub use astro::AstroExtractor;
pub use elixir::ElixirExtractor;
pub use gleam::GleamExtractor;
pub use go::GoExtractor;
pub use mojo::MojoExtractor;
pub use python::PythonExtractor;
pub use rust_lang::RustExtractor;
pub use svelte::SvelteExtractor;
pub use typescript::TypeScriptExtractor;
pub use zig::ZigExtractor;

/// Public API rules for one language.
pub trait LanguageExtractor: Send + Sync {
    /// Append the exported symbols found under `root` to `api.symbols`.
    fn extract(&self, root: &Node, source: &[u8], api: &mut FileApi);
}

/// Data and markup languages: parsed, never yield symbols.
pub struct NoSymbols;

impl LanguageExtractor for NoSymbols {
    fn extract(&self, _root: &Node, _source: &[u8], _api: &mut FileApi) {}
}

static EXTRACTORS: &[(Language, &dyn LanguageExtractor)] = &[
    (Language::Go, &GoExtractor),
    (Language::Rust, &RustExtractor),
    (Language::JavaScript, &TypeScriptExtractor),
    (Language::TypeScript, &TypeScriptExtractor),
    (Language::Tsx, &TypeScriptExtractor),
    (Language::Python, &PythonExtractor),
    (Language::Elixir, &ElixirExtractor),
    (Language::Zig, &ZigExtractor),
    (Language::Svelte, &SvelteExtractor),
    (Language::Astro, &AstroExtractor),
    (Language::Gleam, &GleamExtractor),
    (Language::Mojo, &MojoExtractor),
    (Language::Json, &NoSymbols),
    (Language::Css, &NoSymbols),
    (Language::Toml, &NoSymbols),
    (Language::Markdown, &NoSymbols),
];

pub fn extractor_for(language: Language) -> &'static dyn LanguageExtractor {
    EXTRACTORS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, extractor)| *extractor)
        .unwrap_or(&NoSymbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::supported_languages;

    #[test]
    fn test_every_language_has_an_entry() {
        for lang in supported_languages() {
            assert!(
                EXTRACTORS.iter().any(|(l, _)| l == lang),
                "no extractor entry for {}",
                lang
            );
        }
    }
}
