use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Rust,
    JavaScript,
    TypeScript,
    Tsx,
    Python,
    Elixir,
    Zig,
    Json,
    Css,
    Toml,
    Svelte,
    Astro,
    Gleam,
    Markdown,
    Mojo,
}

/// Extension table, scanned in order. The first language claiming an
/// extension wins, so lookups stay stable even if two entries ever overlap.
const LANGUAGE_TABLE: &[(Language, &[&str])] = &[
    (Language::Go, &["go"]),
    (Language::Rust, &["rs"]),
    (Language::JavaScript, &["js", "mjs", "cjs"]),
    (Language::TypeScript, &["ts"]),
    (Language::Tsx, &["tsx"]),
    (Language::Python, &["py"]),
    (Language::Elixir, &["ex", "exs"]),
    (Language::Zig, &["zig"]),
    (Language::Json, &["json"]),
    (Language::Css, &["css"]),
    (Language::Toml, &["toml"]),
    (Language::Svelte, &["svelte"]),
    (Language::Astro, &["astro"]),
    (Language::Gleam, &["gleam"]),
    (Language::Markdown, &["md", "markdown"]),
    (Language::Mojo, &["mojo", "🔥"]),
];

const SUPPORTED_LANGUAGES: &[Language] = &[
    Language::Go,
    Language::Rust,
    Language::JavaScript,
    Language::TypeScript,
    Language::Tsx,
    Language::Python,
    Language::Elixir,
    Language::Zig,
    Language::Json,
    Language::Css,
    Language::Toml,
    Language::Svelte,
    Language::Astro,
    Language::Gleam,
    Language::Markdown,
    Language::Mojo,
];

impl Language {
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        LANGUAGE_TABLE
            .iter()
            .find(|(_, extensions)| extensions.contains(&ext.as_str()))
            .map(|(lang, _)| *lang)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Python => "python",
            Language::Elixir => "elixir",
            Language::Zig => "zig",
            Language::Json => "json",
            Language::Css => "css",
            Language::Toml => "toml",
            Language::Svelte => "svelte",
            Language::Astro => "astro",
            Language::Gleam => "gleam",
            Language::Markdown => "markdown",
            Language::Mojo => "mojo",
        }
    }

    pub fn file_extensions(&self) -> &'static [&'static str] {
        LANGUAGE_TABLE
            .iter()
            .find(|(lang, _)| lang == self)
            .map(|(_, extensions)| *extensions)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.name() == wanted)
            .ok_or_else(|| format!("Unknown language: {}", s))
    }
}

/// Detect the language of a file from its extension, case-insensitively.
pub fn detect_language(path: impl AsRef<Path>) -> Option<Language> {
    Language::from_path(path.as_ref())
}

/// All supported languages, in lookup-table order.
pub fn supported_languages() -> &'static [Language] {
    SUPPORTED_LANGUAGES
}
