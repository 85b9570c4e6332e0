// UI module for contact-book
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use contact_book::app::{App, AppScreen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::FilePrompt => screens::file_prompt::render_file_prompt(app, f),
        AppScreen::Contacts => screens::contacts::render_contacts(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
