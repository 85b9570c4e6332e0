use crate::app::actions::FileChoice;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, FilePromptState, PromptStep, SessionState};
use crossterm::event::KeyCode;
use std::path::PathBuf;

pub async fn handle_file_prompt_input(app: &mut App, key: KeyCode) {
    match app.prompt.step {
        PromptStep::Choose => handle_choice(app, key).await,
        PromptStep::ExistingPath | PromptStep::NewDirectory | PromptStep::NewName => {
            handle_path_input(app, key).await;
        }
    }
}

async fn handle_choice(app: &mut App, key: KeyCode) {
    let len = FilePromptState::CHOICES.len();

    match key {
        KeyCode::Up | KeyCode::Left => {
            app.prompt.choice_index = wrap_decrement(app.prompt.choice_index, len);
        }
        KeyCode::Down | KeyCode::Right => {
            app.prompt.choice_index = wrap_increment(app.prompt.choice_index, len);
        }
        KeyCode::Enter => {
            let start_dir = app.start_dir.display().to_string();
            if app.prompt.choice_index == 0 {
                app.prompt.step = PromptStep::ExistingPath;
                app.prompt.input = format!("{}/", start_dir.trim_end_matches('/'));
            } else {
                app.prompt.step = PromptStep::NewDirectory;
                app.prompt.input = start_dir;
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            if app.session == SessionState::Loaded {
                app.screen = AppScreen::Contacts;
            } else {
                // Nothing was loaded, so there is nothing to save.
                let _ = app.exit().await;
            }
        }
        _ => {}
    }
}

async fn handle_path_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.prompt.input.push(c),
        KeyCode::Backspace => {
            app.prompt.input.pop();
        }
        KeyCode::Esc => step_back(app),
        KeyCode::Enter => submit_step(app).await,
        _ => {}
    }
}

fn step_back(app: &mut App) {
    app.prompt.step = match app.prompt.step {
        PromptStep::NewName => {
            app.prompt.input = app.prompt.directory.clone();
            PromptStep::NewDirectory
        }
        _ => {
            app.prompt.input.clear();
            PromptStep::Choose
        }
    };
}

async fn submit_step(app: &mut App) {
    let input = app.prompt.input.trim().to_string();

    let choice = match app.prompt.step {
        PromptStep::ExistingPath => FileChoice::Existing(PathBuf::from(input)),
        PromptStep::NewDirectory => {
            app.prompt.directory = if input.is_empty() {
                ".".to_string()
            } else {
                input
            };
            app.prompt.input.clear();
            app.prompt.step = PromptStep::NewName;
            return;
        }
        PromptStep::NewName => FileChoice::New {
            directory: PathBuf::from(&app.prompt.directory),
            name: input,
        },
        PromptStep::Choose => return,
    };

    // Failures are reported on the status line and keep the prompt open.
    if app.choose_file(choice).await.is_ok() && app.screen == AppScreen::Contacts {
        app.prompt = FilePromptState::new();
    }
}
