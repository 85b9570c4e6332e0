use crate::app::state::{App, Focus, FormField};
use crossterm::event::KeyCode;

pub fn handle_form_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.focus = Focus::Table;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.field = app.form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.field = app.form.field.prev();
        }
        KeyCode::Enter => {
            if app.form.field == FormField::Submit {
                app.add_contact();
                app.form.field = FormField::Name;
            } else {
                app.form.field = app.form.field.next();
            }
        }
        KeyCode::Left | KeyCode::Right => handle_picker_key(app, key == KeyCode::Right),
        KeyCode::Char(c) => {
            if let Some(text) = app.form.text_mut() {
                text.push(c);
                refilter_if_country(app);
            }
        }
        KeyCode::Backspace => {
            if let Some(text) = app.form.text_mut() {
                text.pop();
                refilter_if_country(app);
            }
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, forward: bool) {
    match app.form.field {
        FormField::Country => app.cycle_country(forward),
        FormField::Region if forward => app.form.next_region(),
        FormField::Region => app.form.prev_region(),
        _ => {}
    }
}

fn refilter_if_country(app: &mut App) {
    if app.form.field == FormField::Country {
        app.update_country_filter();
    }
}
