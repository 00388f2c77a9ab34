use crate::symbols::FileApi;

/// Longest doc line emitted, in characters, ellipsis included.
pub const MAX_DOC_CHARS: usize = 120;

/// Render a batch of file APIs as a compact text index.
///
/// ```text
/// --- src/server.go (go) ---
///   // NewServer creates a server.
///   [function] func NewServer(cfg Config) *Server {
///
/// ```
///
/// Files without symbols are skipped; no input yields an empty string.
pub fn format_api_index(apis: &[FileApi]) -> String {
    let mut out = String::new();
    for api in apis.iter().filter(|api| !api.symbols.is_empty()) {
        let header = match &api.path {
            Some(path) => format!("--- {} ({}) ---\n", path, api.language),
            None => format!("--- {} ---\n", api.language),
        };
        out.push_str(&header);
        for symbol in &api.symbols {
            if let Some(doc) = &symbol.doc_string {
                out.push_str(&format!("  // {}\n", one_line(doc, MAX_DOC_CHARS)));
            }
            out.push_str(&format!("  [{}] {}\n", symbol.kind, symbol.signature));
        }
        out.push('\n');
    }
    out
}

fn one_line(text: &str, max_chars: usize) -> String {
    let flat = text.replace("\r\n", " ").replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
