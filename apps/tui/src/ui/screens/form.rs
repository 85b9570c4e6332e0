use contact_book::app::{App, Focus, FormField};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Form;
    let block = Block::default()
        .title(" New Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::Gray }));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Phone
            Constraint::Length(1), // Street
            Constraint::Length(1), // City
            Constraint::Length(2), // Country + filter
            Constraint::Length(1), // State
            Constraint::Length(3), // Submit
            Constraint::Min(0),
        ])
        .split(area);

    let form = &app.form;
    let line = |field: FormField, value: &str| field_line(app, field, value.to_string());

    f.render_widget(Paragraph::new(line(FormField::Name, &form.name)), chunks[0]);
    f.render_widget(Paragraph::new(line(FormField::Phone, &form.phone)), chunks[1]);
    f.render_widget(Paragraph::new(line(FormField::Street, &form.street)), chunks[2]);
    f.render_widget(Paragraph::new(line(FormField::City, &form.city)), chunks[3]);

    let country = Text::from(vec![
        field_line(app, FormField::Country, format!("◀ {} ▶", form.country)),
        TextLine::from(Span::styled(
            format!(
                "    filter: {} ({} matches)",
                form.country_query,
                form.country_matches.len()
            ),
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(Paragraph::new(country), chunks[4]);

    let region = if form.regions.is_empty() {
        format!("{} (type)", form.region_text)
    } else {
        format!("◀ {} ▶", form.region())
    };
    f.render_widget(
        Paragraph::new(field_line(app, FormField::Region, region)),
        chunks[5],
    );

    let submit_style = field_style(app, FormField::Submit);
    let submit = Paragraph::new(Span::styled(FormField::Submit.label(), submit_style))
        .block(Block::default().borders(Borders::ALL).border_style(submit_style))
        .alignment(Alignment::Center);
    f.render_widget(submit, chunks[6]);
}

fn field_style(app: &App, field: FormField) -> Style {
    if app.focus == Focus::Form && app.form.field == field {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn field_line(app: &App, field: FormField, value: String) -> TextLine<'static> {
    let style = field_style(app, field);
    let prefix = if app.focus == Focus::Form && app.form.field == field {
        "> "
    } else {
        "  "
    };

    TextLine::from(vec![
        Span::styled(format!("{prefix}{:<8}", format!("{}:", field.label())), style),
        Span::styled(value, style),
    ])
}
