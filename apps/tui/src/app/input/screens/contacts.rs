use crate::app::input::helpers::step_selection;
use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

const PAGE: isize = 5;

pub async fn handle_contacts_input(app: &mut App, key: KeyCode) {
    let total_rows = app.store.len();

    match key {
        KeyCode::Char('q') => {
            // Errors are already on the status line; the session stays open.
            let _ = app.exit().await;
        }
        KeyCode::Char('a') | KeyCode::Tab => {
            app.focus = Focus::Form;
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char('c') => {
            app.clear_inputs();
            app.status_message = "Form cleared".to_string();
        }
        KeyCode::Char('o') => {
            app.open_file_prompt();
        }
        KeyCode::Up => {
            app.selected_row = step_selection(app.selected_row, -1, total_rows);
        }
        KeyCode::Down => {
            app.selected_row = step_selection(app.selected_row, 1, total_rows);
        }
        KeyCode::PageUp => {
            app.selected_row = step_selection(app.selected_row, -PAGE, total_rows);
        }
        KeyCode::PageDown => {
            app.selected_row = step_selection(app.selected_row, PAGE, total_rows);
        }
        KeyCode::Home => {
            app.selected_row = step_selection(Some(0), 0, total_rows);
        }
        KeyCode::End => {
            app.selected_row = step_selection(Some(total_rows), 0, total_rows);
        }
        _ => {}
    }
}
