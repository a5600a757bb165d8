pub mod highlighter;
pub mod language;
pub mod theme;

pub use highlighter::HighlightCache;
pub use language::detect_language;
pub use theme::{DEFAULT_SYNTAX_THEME, resolve_theme, theme_names};

use std::sync::LazyLock;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

pub fn syntax_set() -> &'static SyntaxSet {
    &SYNTAX_SET
}

pub fn theme_set() -> &'static ThemeSet {
    &THEME_SET
}
