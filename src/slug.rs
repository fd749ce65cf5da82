//! Slugging for stable node ids.

/// Turn arbitrary text into a URL-safe slug.
/// - Lowercases ASCII letters
/// - Runs of non-alphanumeric characters collapse into a single `-`
/// - Leading/trailing separators are trimmed
/// - Empty input (or input with no alphanumerics) falls back to `"-"` so an
///   id segment is never empty
pub fn slugify(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !result.is_empty() {
                result.push('-');
            }
            pending_sep = false;
            for lower in c.to_lowercase() {
                result.push(lower);
            }
        } else {
            pending_sep = true;
        }
    }
    if result.is_empty() {
        return "-".to_string();
    }
    result
}
