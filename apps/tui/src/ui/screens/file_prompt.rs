use super::shortcut_spans;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use contact_book::app::state::{FilePromptState, PromptStep};
use contact_book::app::{App, CONTACTS_EXTENSION};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_file_prompt(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(ClearWidget, area);

    let block = Block::default()
        .title(" Open Contacts ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = match app.prompt.step {
        PromptStep::Choose => choice_lines(&app.prompt),
        PromptStep::ExistingPath => input_lines("Path to an existing contacts file:", &app.prompt),
        PromptStep::NewDirectory => input_lines("Directory for the new file:", &app.prompt),
        PromptStep::NewName => {
            let mut lines = input_lines(
                &format!("What is the name of the file? (.{CONTACTS_EXTENSION} is added)"),
                &app.prompt,
            );
            lines.insert(
                0,
                TextLine::from(Span::styled(
                    format!("Directory: {}", app.prompt.directory),
                    Style::default().fg(Color::Gray),
                )),
            );
            lines
        }
    };

    if !app.status_message.is_empty() {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(app.status_message.clone(), style)));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(hint_spans(app.prompt.step)));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn choice_lines(prompt: &FilePromptState) -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from("Do you want to open an existing file or create new?"),
        TextLine::from(""),
    ];

    for (i, choice) in FilePromptState::CHOICES.iter().enumerate() {
        let is_selected = i == prompt.choice_index;
        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let prefix = if is_selected { ">" } else { " " };
        lines.push(TextLine::from(Span::styled(format!("{prefix} {choice}"), style)));
    }

    lines
}

fn input_lines(label: &str, prompt: &FilePromptState) -> Vec<TextLine<'static>> {
    vec![
        TextLine::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Green),
        )),
        TextLine::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(prompt.input.clone()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]),
    ]
}

fn hint_spans(step: PromptStep) -> Vec<Span<'static>> {
    match step {
        PromptStep::Choose => {
            shortcut_spans(&[("↑/↓", "Select"), ("Enter", "Confirm"), ("Esc", "Back")])
        }
        _ => shortcut_spans(&[("Enter", "Confirm"), ("Esc", "Back")]),
    }
}
