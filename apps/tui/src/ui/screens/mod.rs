pub mod contacts;
pub mod file_prompt;
pub mod form;
pub mod help;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub(crate) fn key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// `key: description` pairs rendered as one shortcut hint line.
pub(crate) fn shortcut_spans(pairs: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (i, (key, description)) in pairs.iter().enumerate() {
        spans.push(Span::styled(*key, key_style()));
        let separator = if i + 1 == pairs.len() { "" } else { "   " };
        spans.push(Span::raw(format!(": {description}{separator}")));
    }
    spans
}
