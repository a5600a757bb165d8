use log::debug;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, Theme};

use super::syntax_set;
use crate::buffer::Buffer;

/// Highlighted spans for the top of a buffer, extended on demand.
///
/// syntect carries parse state from line to line, so lines are highlighted in order from
/// the first one and cached until the buffer version changes.
pub struct HighlightCache {
    language: String,
    theme: &'static Theme,
    highlighter: HighlightLines<'static>,
    version: usize,
    lines: Vec<Vec<(Style, String)>>,
}

impl HighlightCache {
    pub fn new(language: &str, theme: &'static Theme) -> Option<Self> {
        let syntax = syntax_set().find_syntax_by_name(language)?;
        Some(Self {
            language: language.to_string(),
            theme,
            highlighter: HighlightLines::new(syntax, theme),
            version: 0,
            lines: Vec::new(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Make sure lines `0..=last_line` are highlighted for the current buffer content
    pub fn ensure(&mut self, buffer: &Buffer, last_line: usize) {
        if buffer.version != self.version {
            self.reset(buffer.version);
        }

        let end = last_line.min(buffer.line_count().saturating_sub(1));
        while self.lines.len() <= end {
            let idx = self.lines.len();
            let text = buffer.rope.line(idx).to_string();
            let spans = match self.highlighter.highlight_line(&text, syntax_set()) {
                Ok(ranges) => ranges
                    .into_iter()
                    .map(|(style, piece)| {
                        (style, piece.trim_end_matches(['\n', '\r']).to_string())
                    })
                    .filter(|(_, piece)| !piece.is_empty())
                    .collect(),
                Err(err) => {
                    debug!("Highlighting stopped at line {}: {}", idx, err);
                    vec![(Style::default(), text.trim_end_matches(['\n', '\r']).to_string())]
                }
            };
            self.lines.push(spans);
        }
    }

    pub fn line(&self, idx: usize) -> Option<&[(Style, String)]> {
        self.lines.get(idx).map(Vec::as_slice)
    }

    fn reset(&mut self, version: usize) {
        if let Some(syntax) = syntax_set().find_syntax_by_name(&self.language) {
            self.highlighter = HighlightLines::new(syntax, self.theme);
        }
        self.lines.clear();
        self.version = version;
    }
}
