//! Extract and print the public API of a project

use anyhow::{Context, Result};
use apidex_parser::{ApiExtractor, FileApi, ParseError, ParserConfig, detect_language, format_api_index};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::common::{relative_display, resolve_root};
use crate::filters::{MAX_FILE_SIZE, is_excluded_dir, is_test_dir, is_test_file};

pub struct IndexOptions {
    pub json: bool,
    pub include_tests: bool,
}

pub fn index(paths: &[PathBuf], options: &IndexOptions, config: ParserConfig) -> Result<()> {
    let extractor = ApiExtractor::with_config(config);
    let start = Instant::now();

    let mut apis = Vec::new();
    for path in paths {
        apis.extend(collect_file_apis(path, &extractor, options.include_tests)?);
    }

    let symbol_count: usize = apis.iter().map(|api| api.symbols.len()).sum();
    info!(
        "Indexed {} files with public symbols ({} symbols) in {:.2}s",
        apis.len(),
        symbol_count,
        start.elapsed().as_secs_f64()
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&apis)?);
    } else {
        print!("{}", format_api_index(&apis));
    }
    Ok(())
}

/// Extract every file under `path` (or `path` itself when it is a file).
/// Files without public symbols are left out.
pub fn collect_file_apis(path: &Path, extractor: &ApiExtractor, include_tests: bool) -> Result<Vec<FileApi>> {
    let root = resolve_root(path)?;

    if root.is_file() {
        let display = path.to_string_lossy().into_owned();
        return Ok(extract_one(&root, display, extractor).into_iter().collect());
    }

    debug!("Walking {}", root.display());

    // Skip hidden entries, dependency folders, and test folders on request
    let walker = WalkBuilder::new(&root)
        .hidden(true)
        .git_ignore(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if !is_dir || entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !is_excluded_dir(&name) && (include_tests || !is_test_dir(&name))
        })
        .build();

    let mut apis = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        let file_path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !include_tests && is_test_file(&name) {
            debug!("Skipping test file {}", file_path.display());
            continue;
        }

        let rel_path = relative_display(file_path, &root);
        if let Some(api) = extract_one(file_path, rel_path, extractor) {
            apis.push(api);
        }
    }

    Ok(apis)
}

fn extract_one(path: &Path, display_path: String, extractor: &ApiExtractor) -> Option<FileApi> {
    let language = detect_language(path)?;

    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    if size > MAX_FILE_SIZE {
        debug!("Skipping {} (too large: {} bytes)", display_path, size);
        return None;
    }

    let source = match fs::read(path).with_context(|| format!("Failed to read {}", display_path)) {
        Ok(source) => source,
        Err(e) => {
            warn!("{:#}", e);
            return None;
        }
    };

    match extractor.extract(&source, language) {
        Ok(api) if api.is_empty() => None,
        Ok(api) => Some(api.with_path(display_path)),
        Err(ParseError::UnsupportedLanguage(reason)) => {
            debug!("Skipping {}: unsupported language {}", display_path, reason);
            None
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", display_path, e);
            None
        }
    }
}
