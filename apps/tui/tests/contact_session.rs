use contact_book::app::{App, DeleteOutcome, FileChoice, SessionState};
use contact_book::persistence;
use contact_book::{Contact, EmbeddedCatalog, Orientation, TableModel};
use std::path::PathBuf;
use tempfile::TempDir;

fn new_app() -> App {
    let catalog = EmbeddedCatalog::builtin().expect("built-in catalog parses");
    App::new(Box::new(catalog), PathBuf::from("."))
}

fn alice_fields() -> [String; 6] {
    [
        "Alice",
        "555-1234",
        "1 Main St",
        "Springfield",
        "Illinois",
        "United States",
    ]
    .map(str::to_string)
}

#[tokio::test]
async fn test_alice_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("p.csv");

    let mut app = new_app();
    app.choose_file(FileChoice::Existing(path.clone())).await?;
    app.add(alice_fields());

    let row: Vec<_> = (0..app.table.column_count())
        .filter_map(|col| app.table.cell(0, col))
        .collect();
    assert_eq!(row, alice_fields());
    assert_eq!(
        app.table.header(4, Orientation::Horizontal).as_deref(),
        Some("State")
    );

    app.exit().await?;
    assert_eq!(app.session, SessionState::SavedOnExit);

    let content = std::fs::read_to_string(&path)?;
    assert!(content
        .lines()
        .any(|line| line == "0,Alice,555-1234,1 Main St,Springfield,Illinois,United States"));

    let mut reloaded = new_app();
    let report = reloaded.choose_file(FileChoice::Existing(path)).await?;
    assert!(report.is_complete());
    assert_eq!(reloaded.store.len(), 1);
    assert_eq!(
        reloaded.store.get(0),
        Some(&Contact::from_fields(alice_fields()))
    );

    Ok(())
}

#[tokio::test]
async fn test_delete_then_save_reindexes_rows() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("book.csv");

    let mut app = new_app();
    app.choose_file(FileChoice::Existing(path.clone())).await?;
    for name in ["r0", "r1", "r2"] {
        let mut fields = alice_fields();
        fields[0] = name.to_string();
        app.add(fields);
    }

    assert!(matches!(app.delete(Some(1)), DeleteOutcome::Removed(_)));
    assert_eq!(app.table.row_count(), 2);
    app.exit().await?;

    let content = std::fs::read_to_string(&path)?;
    let indices: Vec<_> = content
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(indices, ["0", "1"]);
    assert!(content.contains("1,r2,"));

    Ok(())
}

#[tokio::test]
async fn test_choosing_second_file_appends_its_contacts() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = TempDir::new()?;
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    persistence::save(&first, &[Contact::from_fields(alice_fields())]).await?;
    persistence::save(
        &second,
        &[Contact::new("Bob", "", "", "Toronto", "Ontario", "Canada")],
    )
    .await?;

    let mut app = new_app();
    app.choose_file(FileChoice::Existing(first)).await?;
    app.choose_file(FileChoice::Existing(second.clone())).await?;

    assert_eq!(app.store.len(), 2);
    assert_eq!(app.file_path.as_deref(), Some(second.as_path()));

    Ok(())
}

#[tokio::test]
async fn test_truncated_file_keeps_leading_rows() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("damaged.csv");
    std::fs::write(
        &path,
        ",Name,Phone Number,Street,City,State,Country\n\
         0,Alice,555-1234,1 Main St,Springfield,Illinois,United States\n\
         1,\"unterminated\n",
    )?;

    let mut app = new_app();
    let report = app.choose_file(FileChoice::Existing(path)).await?;

    assert!(!report.is_complete());
    assert_eq!(app.store.len(), 1);
    assert!(!app.status_message.starts_with("Error"));

    Ok(())
}
