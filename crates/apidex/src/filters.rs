//! Which files and directories the walker skips.
//!
//! Dependency and build output directories are always pruned. Test files and
//! test directories are pruned unless the user asks for them.

/// Files larger than this are not indexed (1MB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Directories never walked into.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    "vendor",
    "_build",
    "deps",
    "zig-cache",
    "zig-out",
    "__pycache__",
    "venv",
    "coverage",
    "out",
];

/// Directory names that conventionally hold tests, fixtures or samples.
const TEST_DIRS: &[&str] = &[
    "test",
    "tests",
    "spec",
    "specs",
    "__tests__",
    "__mocks__",
    "__snapshots__",
    "test_helpers",
    "testing",
    "testdata",
    "testutil",
    "testutils",
    "fixtures",
    "e2e",
    "integration_tests",
    "unit_tests",
    "benches",
    "benchmarks",
    "examples",
];

const SCRIPT_EXTENSIONS: &[&str] = &[".js", ".ts", ".jsx", ".tsx", ".mjs", ".cjs"];

pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

pub fn is_test_dir(name: &str) -> bool {
    TEST_DIRS.contains(&name.to_lowercase().as_str())
}

/// Whether a file name follows a test naming convention of one of the
/// supported languages. Matching is on the name only, case-insensitive.
pub fn is_test_file(name: &str) -> bool {
    let lower = name.to_lowercase();

    if lower.ends_with("_test.go")
        || lower.ends_with("_test.rs")
        || lower.ends_with("_tests.rs")
        || lower.ends_with("_test.exs")
        || lower.ends_with("_test.gleam")
        || lower.ends_with(".test.svelte")
        || lower.ends_with(".test.astro")
    {
        return true;
    }

    for ext in SCRIPT_EXTENSIONS {
        if let Some(stem) = lower.strip_suffix(ext) {
            if stem.ends_with(".test") || stem.ends_with(".spec") || stem.ends_with("_test") {
                return true;
            }
        }
    }

    for ext in [".py", ".zig", ".mojo"] {
        if let Some(stem) = lower.strip_suffix(ext) {
            if stem.starts_with("test_") || stem.ends_with("_test") {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_test_file() {
        let cases = [
            ("parser_test.go", true),
            ("parser.go", false),
            ("parser_test.rs", true),
            ("parser_tests.rs", true),
            ("parser.rs", false),
            ("parser.test.ts", true),
            ("parser.spec.tsx", true),
            ("parser_test.js", true),
            ("parser.test.mjs", true),
            ("parser.ts", false),
            ("latest.ts", false),
            ("test_parser.py", true),
            ("parser_test.py", true),
            ("parser.py", false),
            ("contest.py", false),
            ("parser_test.exs", true),
            ("parser.ex", false),
            ("parser_test.gleam", true),
            ("parser.gleam", false),
            ("test_alloc.zig", true),
            ("alloc_test.zig", true),
            ("alloc.zig", false),
            ("test_model.mojo", true),
            ("model.mojo", false),
            ("Button.test.svelte", true),
            ("Button.svelte", false),
            ("Page.test.astro", true),
            ("Page.astro", false),
        ];
        for (name, expected) in cases {
            assert_eq!(is_test_file(name), expected, "{}", name);
        }
    }

    #[test]
    fn test_is_test_file_case_insensitive() {
        assert!(is_test_file("Parser_Test.GO"));
        assert!(is_test_file("TEST_PARSER.PY"));
    }

    #[test]
    fn test_is_test_dir() {
        for name in ["test", "tests", "__tests__", "testdata", "fixtures", "e2e", "benches", "examples"] {
            assert!(is_test_dir(name), "{}", name);
        }
        assert!(is_test_dir("Tests"));
        assert!(!is_test_dir("src"));
        assert!(!is_test_dir("contest"));
    }

    #[test]
    fn test_is_excluded_dir() {
        assert!(is_excluded_dir("node_modules"));
        assert!(is_excluded_dir("target"));
        assert!(is_excluded_dir("zig-cache"));
        assert!(!is_excluded_dir("src"));
        assert!(!is_excluded_dir("lib"));
    }
}
