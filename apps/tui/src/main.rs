mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use contact_book::app::{App, FileChoice};
use contact_book::catalog::{EmbeddedCatalog, LocationCatalog};
use contact_book::config::{init_app_config, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config();

    // Check if we're running in a terminal
    let headless = args.headless || !is_terminal();

    if headless {
        logging::init_stderr_logger(config.debug)?;
    } else if let Some(path) = &config.log_file {
        logging::init_file_logger(path, config.debug)?;
    }

    let catalog = load_catalog(&config)?;
    let mut app = App::new(catalog, config.start_dir.clone());

    if headless {
        return event::run_headless(&mut app, &config, args.json).await;
    }

    // A configured file skips the prompt. If it cannot be read the prompt opens
    // with the error on the status line.
    if let Some(path) = config.contacts_file.clone() {
        let _ = app.choose_file(FileChoice::Existing(path)).await;
    }

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup(true, true);

    result
}

fn load_catalog(config: &AppConfig) -> Result<Box<dyn LocationCatalog>> {
    let catalog = match &config.catalog_path {
        Some(path) => EmbeddedCatalog::from_path(path)?,
        None => EmbeddedCatalog::builtin()?,
    };
    Ok(Box::new(catalog))
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
