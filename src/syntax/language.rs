use log::debug;
use std::path::Path;

use super::syntax_set;

/// Name of the syntax definition matching a file name or extension.
///
/// Returns None when nothing matches, or when only the plain text syntax does, which
/// callers treat as "no highlighting".
pub fn detect_language(path: &Path) -> Option<String> {
    let syntaxes = syntax_set();
    let by_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|name| syntaxes.find_syntax_by_extension(name));
    let by_extension = || {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| syntaxes.find_syntax_by_extension(ext))
    };

    let syntax = by_name.or_else(by_extension)?;
    if syntax.name == syntaxes.find_syntax_plain_text().name {
        return None;
    }
    debug!("Detected {} for {}", syntax.name, path.display());
    Some(syntax.name.clone())
}
