// App module for contact-book
// Session state and the controller operations behind every key binding

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{DeleteOutcome, FileChoice, CONTACTS_EXTENSION};
pub use input::handle_input;
pub use state::{App, AppScreen, Focus, FormField, SessionState};
