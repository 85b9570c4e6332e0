use color_eyre::eyre::eyre;
use color_eyre::Result;
use contact_book::app::{handle_input, App, FileChoice};
use contact_book::config::AppConfig;
use contact_book::domain::Contact;
use contact_book::persistence::LoadReport;
use contact_book::table::{Orientation, TableModel};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::path::Path;

use crate::ui;

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, config: &AppConfig, json: bool) -> Result<()> {
    let path = config
        .contacts_file
        .clone()
        .ok_or_else(|| eyre!("Headless mode needs --file or CONTACTS_FILE"))?;

    let report = app.choose_file(FileChoice::Existing(path.clone())).await?;

    if json {
        render_headless_json(app, &path, &report)?;
    } else {
        render_headless_table(app, &path, &report);
    }

    Ok(())
}

fn render_headless_table(app: &App, path: &Path, report: &LoadReport) {
    let table = &app.table;
    let columns = table.column_count();

    let mut widths: Vec<usize> = (0..columns)
        .map(|col| {
            table
                .header(col, Orientation::Horizontal)
                .map_or(0, |h| h.chars().count())
        })
        .collect();
    for row in 0..table.row_count() {
        for (col, width) in widths.iter_mut().enumerate() {
            let len = table.cell(row, col).map_or(0, |c| c.chars().count());
            *width = (*width).max(len);
        }
    }
    let index_width = table.row_count().saturating_sub(1).to_string().len();

    println!("\nContacts in {}", path.display());
    println!("{}", "=".repeat(12 + path.display().to_string().len()));

    let header: Vec<String> = (0..columns)
        .map(|col| {
            let title = table.header(col, Orientation::Horizontal).unwrap_or_default();
            format!("{title:<width$}", width = widths[col])
        })
        .collect();
    println!("{:index_width$}  {}", "", header.join("  "));

    for row in 0..table.row_count() {
        let index = table.header(row, Orientation::Vertical).unwrap_or_default();
        let cells: Vec<String> = (0..columns)
            .map(|col| {
                let cell = table.cell(row, col).unwrap_or_default();
                format!("{cell:<width$}", width = widths[col])
            })
            .collect();
        println!("{index:>index_width$}  {}", cells.join("  "));
    }

    println!("\nTotal contacts: {}", table.row_count());
    if let Some(stop) = &report.stopped_at {
        println!("Stopped reading early: {stop}");
    }
}

fn render_headless_json(app: &App, path: &Path, report: &LoadReport) -> Result<()> {
    let listing = HeadlessListing {
        file: path.display().to_string(),
        created: report.created,
        stopped_at: report.stopped_at.as_ref().map(ToString::to_string),
        contacts: &app.table.rows()[..],
    };
    let json = serde_json::to_string_pretty(&listing)?;
    println!("{json}");
    Ok(())
}

#[derive(serde::Serialize)]
struct HeadlessListing<'a> {
    file: String,
    created: bool,
    stopped_at: Option<String>,
    contacts: &'a [Contact],
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 100;

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            // Release events would double every keystroke on some platforms
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                handle_input(app, key.code).await;
            }
            Ok(Event::Resize(_, _)) => {
                // Non-fatal; the next loop iteration redraws anyway
                let _ = terminal.draw(|f| ui::ui(app, f));
            }
            Ok(_) | Err(_) => {}
        }
    }

    Ok(())
}
