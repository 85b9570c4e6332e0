use crate::app::state::{App, AppScreen, Focus};
use crossterm::event::KeyCode;

mod contacts;
mod file_prompt;
mod form;
mod help;

pub async fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match (app.screen, app.focus) {
        (AppScreen::FilePrompt, _) => file_prompt::handle_file_prompt_input(app, key).await,
        (AppScreen::Contacts, Focus::Table) => contacts::handle_contacts_input(app, key).await,
        (AppScreen::Contacts, Focus::Form) => form::handle_form_input(app, key),
    }
}
