use std::env;
use std::path::PathBuf;

/// Environment variable holding extra grammar directories, separated the
/// same way as `PATH` on the host platform.
pub const GRAMMAR_PATH_ENV: &str = "APIDEX_GRAMMAR_PATH";

/// Parser configuration.
///
/// Only grammars that are not compiled into the crate (mojo) are affected:
/// they are looked up as shared libraries in `grammar_dirs`, in order. An
/// empty list means those languages are unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub grammar_dirs: Vec<PathBuf>,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `APIDEX_GRAMMAR_PATH`. Unset or empty
    /// yields no grammar directories.
    pub fn from_env() -> Self {
        let grammar_dirs = env::var_os(GRAMMAR_PATH_ENV)
            .map(|value| {
                env::split_paths(&value)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self { grammar_dirs }
    }

    pub fn with_grammar_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.grammar_dirs.push(dir.into());
        self
    }
}
