//! Common utilities for CLI commands

use anyhow::{Result, bail};
use apidex_parser::ParserConfig;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Parser configuration from `APIDEX_GRAMMAR_PATH`, extended with the
/// directories given on the command line.
pub fn parser_config(grammar_dirs: &[PathBuf]) -> ParserConfig {
    grammar_dirs
        .iter()
        .fold(ParserConfig::from_env(), |config, dir| config.with_grammar_dir(dir))
}

/// Resolves a path to an absolute one, failing if it does not exist.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    if !absolute.exists() {
        bail!("Path not found: {}", path.display());
    }
    Ok(absolute)
}

/// Path of `path` relative to `root`, with `/` separators.
pub fn relative_display(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if MAIN_SEPARATOR == '\\' {
        rel.replace(MAIN_SEPARATOR, "/")
    } else {
        rel.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_resolve_root_relative() {
        let result = resolve_root(Path::new(".")).unwrap();
        assert_eq!(result, env::current_dir().unwrap().join("."));
    }

    #[test]
    fn test_resolve_root_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = resolve_root(&missing).unwrap_err();
        assert!(err.to_string().contains("Path not found"));
    }

    #[test]
    fn test_relative_display() {
        let root = Path::new("/project");
        assert_eq!(
            relative_display(Path::new("/project/src/lib.rs"), root),
            "src/lib.rs"
        );
        assert_eq!(relative_display(Path::new("/other/x.go"), root), "/other/x.go");
    }

    #[test]
    fn test_parser_config_appends_cli_dirs() {
        let dirs = vec![PathBuf::from("/grammars/a"), PathBuf::from("/grammars/b")];
        let config = parser_config(&dirs);
        assert!(config.grammar_dirs.ends_with(&dirs));
    }
}
