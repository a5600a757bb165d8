use log::warn;
use syntect::highlighting::Theme;

use super::theme_set;

pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

/// Look up a bundled syntect theme, falling back to the default one
pub fn resolve_theme(name: &str) -> Option<&'static Theme> {
    let themes = &theme_set().themes;
    if let Some(theme) = themes.get(name) {
        return Some(theme);
    }
    warn!("Unknown syntax theme '{}', using {}", name, DEFAULT_SYNTAX_THEME);
    themes
        .get(DEFAULT_SYNTAX_THEME)
        .or_else(|| themes.values().next())
}

pub fn theme_names() -> Vec<String> {
    theme_set().themes.keys().cloned().collect()
}
