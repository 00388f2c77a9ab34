//! List supported languages

use anyhow::Result;
use apidex_parser::grammar::{self, GrammarSource};
use apidex_parser::{Language, ParserConfig, supported_languages};

pub fn languages(config: &ParserConfig) -> Result<()> {
    for language in supported_languages() {
        println!("{}", describe(*language, config));
    }
    Ok(())
}

fn describe(language: Language, config: &ParserConfig) -> String {
    let extensions = language
        .file_extensions()
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(" ");

    let source = match grammar::grammar_source(language) {
        GrammarSource::Bundled(_) => "bundled".to_string(),
        GrammarSource::Runtime(name) if grammar::is_available(language, config) => {
            format!("runtime ({} found)", name)
        }
        GrammarSource::Runtime(name) => format!("runtime ({} not found)", name),
    };

    format!("{:<12} {:<20} {}", language.name(), extensions, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_bundled() {
        let line = describe(Language::JavaScript, &ParserConfig::new());
        assert!(line.starts_with("javascript"));
        assert!(line.contains(".js .mjs .cjs"));
        assert!(line.ends_with("bundled"));
    }

    #[test]
    fn test_describe_runtime_missing() {
        let line = describe(Language::Mojo, &ParserConfig::new());
        assert!(line.ends_with("runtime (mojo not found)"));
    }

    #[test]
    fn test_describe_zig_bundled() {
        let line = describe(Language::Zig, &ParserConfig::new());
        assert!(line.ends_with("bundled"));
    }
}
