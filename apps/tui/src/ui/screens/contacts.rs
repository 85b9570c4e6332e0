use super::{form::render_form, shortcut_spans};
use crate::ui::widgets::tables::{column_widths, scroll_offset};
use contact_book::app::{App, Focus};
use contact_book::table::{Orientation, TableModel};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

const MAX_COLUMN_WIDTH: u16 = 24;

pub fn render_contacts(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(8),    // Table and form
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title(app, f, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(layout[1]);

    render_table(app, f, body[0]);
    render_form(app, f, body[1]);
    render_status(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let file = app
        .file_path
        .as_ref()
        .map_or_else(|| "(no file)".to_string(), |p| p.display().to_string());

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Contact Book ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(file, Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(title, area);
}

fn render_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let table = &app.table;
    let border_color = if app.focus == Focus::Table {
        Color::Yellow
    } else {
        Color::Gray
    };

    if table.row_count() == 0 {
        let block = Block::default()
            .title("Contacts")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let paragraph = Paragraph::new("No contacts yet. Press 'a' to add one.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        std::iter::once(Cell::from("#")).chain(
            (0..table.column_count())
                .filter_map(|col| table.header(col, Orientation::Horizontal))
                .map(|title| Cell::from(title.into_owned())),
        ),
    )
    .style(header_style);

    let total_rows = table.row_count();
    // Borders plus the header row
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let selected = app.selected_row.unwrap_or(0);
    let offset = scroll_offset(total_rows, max_visible_rows, selected);

    let rows = (offset..total_rows).take(max_visible_rows).map(|row| {
        let style = if app.selected_row == Some(row) {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let index = table
            .header(row, Orientation::Vertical)
            .unwrap_or_default()
            .into_owned();
        let cells = (0..table.column_count())
            .map(|col| Cell::from(table.cell(row, col).unwrap_or_default().to_string()));

        Row::new(std::iter::once(Cell::from(index)).chain(cells)).style(style)
    });

    let index_width = u16::try_from(total_rows.to_string().len()).unwrap_or(u16::MAX);
    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(index_width))
        .chain(column_widths(table, MAX_COLUMN_WIDTH))
        .collect();

    let title = app.selected_row.map_or_else(
        || format!("Contacts ({total_rows})"),
        |row| format!("Contacts ({} of {total_rows})", row + 1),
    );

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .column_spacing(1);

    f.render_widget(widget, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let status = Paragraph::new(Text::from(Span::styled(app.status_message.as_str(), style)))
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let spans = match app.focus {
        Focus::Table => shortcut_spans(&[
            ("a", "Add"),
            ("d", "Delete"),
            ("c", "Clear form"),
            ("o", "Open file"),
            ("q", "Save & quit"),
            ("F1", "Help"),
        ]),
        Focus::Form => shortcut_spans(&[
            ("Tab/↑/↓", "Field"),
            ("←/→", "Choose"),
            ("Enter", "Next / Add"),
            ("Esc", "Back to table"),
        ]),
    };

    let shortcuts = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(shortcuts, area);
}
