use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn bold(selection: &str) -> String {
    format!("**{}**", selection)
}

pub fn italic(selection: &str) -> String {
    format!("*{}*", selection)
}

/// Markdown inline link. The current selection is discarded in favour of
/// the display text the user confirmed.
pub fn link(display_text: &str, address: &str) -> String {
    format!("[{}]({})", display_text, address)
}

/// Result of pressing Tab over a selection: the replacement text and the
/// caret offset relative to the selection start.
pub fn indent_with_tab(selection: &str) -> (String, usize) {
    (format!("\t{}", selection), 1)
}
