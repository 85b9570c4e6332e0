use super::key_style;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 12] = [
    ("F1", "Toggle this help popup"),
    ("a / Tab", "Move to the new contact form"),
    ("d / Delete", "Delete the selected contact"),
    ("c", "Clear the form"),
    ("o", "Open or create another contacts file"),
    ("q", "Save to the contacts file and quit"),
    ("↑/↓ PgUp/PgDn", "Move the selection"),
    ("Home/End", "First / last contact"),
    ("Tab / Shift-Tab", "Next / previous form field"),
    ("←/→", "Cycle countries or states"),
    ("typing in Country", "Filter the country list"),
    ("Enter on Add", "Add the contact"),
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(70, 70, f.area());
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(key_style())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Contact Book",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Contacts are written to the chosen file only when you quit with 'q'."),
        TextLine::from(""),
    ];

    lines.extend(SHORTCUTS.iter().map(|(key, description)| {
        TextLine::from(vec![
            Span::styled(format!("  {key:<18}"), key_style()),
            Span::raw(*description),
        ])
    }));

    lines
}
