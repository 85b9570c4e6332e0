//! Reading and writing the contacts CSV file.
//!
//! `save` prefixes every row with its position and `load` throws that column
//! away again, so files written by this module always start with an unnamed
//! index column.

use crate::domain::{Contact, ContactField};
use crate::error::PersistenceError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Header row written by `save`. The leading empty cell names the index column.
pub const HEADER: [&str; ContactField::COUNT + 1] = [
    "",
    "Name",
    "Phone Number",
    "Street",
    "City",
    "State",
    "Country",
];

const ROW_WIDTH: usize = HEADER.len();

/// Why reading stopped before the end of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStop {
    /// The row did not have an index column plus six fields.
    FieldCount { line: u64, found: usize },
    /// The CSV reader rejected the row (bad quoting, invalid UTF-8, ...).
    Malformed { line: Option<u64>, message: String },
}

impl std::fmt::Display for ParseStop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount { line, found } => {
                write!(f, "line {line}: expected {ROW_WIDTH} fields, found {found}")
            }
            Self::Malformed {
                line: Some(line),
                message,
            } => write!(f, "line {line}: {message}"),
            Self::Malformed {
                line: None,
                message,
            } => f.write_str(message),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Contacts read before the end of the file or the first bad row.
    pub records: Vec<Contact>,
    /// The file did not exist and an empty one was created.
    pub created: bool,
    pub stopped_at: Option<ParseStop>,
}

impl LoadReport {
    pub const fn is_complete(&self) -> bool {
        self.stopped_at.is_none()
    }
}

/// Loads contacts from `path`, creating an empty file if there is none.
///
/// Parse problems never fail the call: the rows read so far are returned and
/// the reason is kept in [`LoadReport::stopped_at`].
pub async fn load(path: &Path) -> Result<LoadReport, PersistenceError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_empty(path).await?;
            info!(path = %path.display(), "created empty contacts file");
            return Ok(LoadReport {
                created: true,
                ..LoadReport::default()
            });
        }
        Err(e) => return Err(PersistenceError::io(path, e)),
    };

    let (records, stopped_at) = parse(&bytes);

    match &stopped_at {
        Some(stop) => warn!(
            path = %path.display(),
            loaded = records.len(),
            %stop,
            "stopped reading contacts file early"
        ),
        None => info!(path = %path.display(), loaded = records.len(), "loaded contacts"),
    }

    Ok(LoadReport {
        records,
        created: false,
        stopped_at,
    })
}

/// Overwrites `path` with a header row and one indexed row per contact.
pub async fn save(path: &Path, records: &[Contact]) -> Result<(), PersistenceError> {
    let bytes = encode(records)?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| PersistenceError::io(path, e))?;

    info!(path = %path.display(), saved = records.len(), "saved contacts");
    Ok(())
}

async fn create_empty(path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::io(parent, e))?;
        }
    }

    tokio::fs::File::create(path)
        .await
        .map_err(|e| PersistenceError::io(path, e))?;

    Ok(())
}

fn parse(bytes: &[u8]) -> (Vec<Contact>, Option<ParseStop>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                let stop = ParseStop::Malformed {
                    line: e.position().map(csv::Position::line),
                    message: e.to_string(),
                };
                return (records, Some(stop));
            }
        };

        if row.len() != ROW_WIDTH {
            let line = row.position().map_or(0, csv::Position::line);
            return (
                records,
                Some(ParseStop::FieldCount {
                    line,
                    found: row.len(),
                }),
            );
        }

        // Column 0 is the index written by `save`.
        let mut fields = row.iter().skip(1).map(str::to_string);
        let fields: [String; ContactField::COUNT] =
            std::array::from_fn(|_| fields.next().unwrap_or_default());
        records.push(Contact::from_fields(fields));
    }

    debug!(rows = records.len(), "parsed contacts file");
    (records, None)
}

fn encode(records: &[Contact]) -> Result<Vec<u8>, PersistenceError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for (index, contact) in records.iter().enumerate() {
        let index = index.to_string();
        writer.write_record(std::iter::once(index.as_str()).chain(contact.fields()))?;
    }

    writer
        .into_inner()
        .map_err(|e| PersistenceError::Encode(csv::Error::from(e.into_error())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn alice() -> Contact {
        Contact::new(
            "Alice",
            "555-1234",
            "1 Main St",
            "Springfield",
            "Illinois",
            "United States",
        )
    }

    fn bob() -> Contact {
        Contact::new("Bob", "", "22 Elm, Apt 4", "Toronto", "Ontario", "Canada")
    }

    #[tokio::test]
    async fn test_save_writes_index_column() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("contacts.csv");

        save(&path, &[alice(), bob()]).await?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(
            content,
            ",Name,Phone Number,Street,City,State,Country\n\
             0,Alice,555-1234,1 Main St,Springfield,Illinois,United States\n\
             1,Bob,,\"22 Elm, Apt 4\",Toronto,Ontario,Canada\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_round_trip_strips_index() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("contacts.csv");
        let contacts = vec![alice(), bob(), Contact::default()];

        save(&path, &contacts).await?;
        let report = load(&path).await?;

        assert!(report.is_complete());
        assert!(!report.created);
        assert_eq!(report.records, contacts);

        Ok(())
    }

    #[tokio::test]
    async fn test_save_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("contacts.csv");

        save(&path, &[alice(), bob()]).await?;
        let first = std::fs::read(&path)?;
        save(&path, &[alice(), bob()]).await?;
        let second = std::fs::read(&path)?;

        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_created() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("new.csv");

        let report = load(&path).await?;

        assert!(report.created);
        assert!(report.records.is_empty());
        assert_eq!(std::fs::read(&path)?.len(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_file_loads_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "")?;

        let report = load(&path).await?;

        assert_eq!(report, LoadReport::default());
        Ok(())
    }

    #[test]
    fn parse_keeps_rows_before_bad_row() {
        let input = ",Name,Phone Number,Street,City,State,Country\n\
                     0,Alice,555-1234,1 Main St,Springfield,Illinois,United States\n\
                     1,Broken,row\n\
                     2,Carol,1,2,3,4,5\n";

        let (records, stop) = parse(input.as_bytes());

        assert_eq!(records, vec![alice()]);
        assert_eq!(stop, Some(ParseStop::FieldCount { line: 3, found: 3 }));
    }

    #[test]
    fn parse_ignores_index_values_and_blank_lines() {
        let input = ",Name,Phone Number,Street,City,State,Country\n\
                     \n\
                     x,Alice,555-1234,1 Main St,Springfield,Illinois,United States\n";

        let (records, stop) = parse(input.as_bytes());

        assert_eq!(records, vec![alice()]);
        assert_eq!(stop, None);
    }

    #[test]
    fn parse_stops_on_invalid_utf8() {
        let mut input = b",Name,Phone Number,Street,City,State,Country\n".to_vec();
        input.extend_from_slice(b"0,A,B,C,D,E,F\n");
        input.extend_from_slice(b"1,\xff\xfe,B,C,D,E,F\n");

        let (records, stop) = parse(&input);

        assert_eq!(records.len(), 1);
        assert!(matches!(stop, Some(ParseStop::Malformed { .. })));
    }
}
