use crate::domain::ContactField;
use crate::store::Snapshot;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Grid view of tabular data, independent of any widget toolkit.
pub trait TableModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn cell(&self, row: usize, column: usize) -> Option<&str>;

    /// Column names for `Horizontal`, row numbers for `Vertical`.
    fn header(&self, section: usize, orientation: Orientation) -> Option<Cow<'_, str>>;
}

/// Table projection of the contact store.
///
/// Holds nothing but the latest snapshot; callers rebuild it after every store
/// mutation instead of patching rows.
#[derive(Debug, Clone)]
pub struct ContactTable {
    rows: Snapshot,
}

impl ContactTable {
    pub const HEADERS: [&'static str; ContactField::COUNT] =
        ["Name", "Phone Number", "Street", "City", "State", "Country"];

    pub const fn new(rows: Snapshot) -> Self {
        Self { rows }
    }

    pub fn rebuild(&mut self, rows: Snapshot) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &Snapshot {
        &self.rows
    }
}

impl Default for ContactTable {
    fn default() -> Self {
        Self::new(Snapshot::from(Vec::new()))
    }
}

impl TableModel for ContactTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        ContactField::COUNT
    }

    fn cell(&self, row: usize, column: usize) -> Option<&str> {
        let field = ContactField::from_index(column)?;
        self.rows.get(row).map(|contact| contact.field(field))
    }

    fn header(&self, section: usize, orientation: Orientation) -> Option<Cow<'_, str>> {
        match orientation {
            Orientation::Horizontal => Self::HEADERS.get(section).map(|h| Cow::Borrowed(*h)),
            Orientation::Vertical => {
                (section < self.rows.len()).then(|| Cow::Owned(section.to_string()))
            }
        }
    }
}
