use crate::app::state::{App, AppScreen, Focus, SessionState};
use crate::catalog::filter_countries;
use crate::domain::Contact;
use crate::error::{PersistenceError, StoreError};
use crate::persistence::{self, LoadReport};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extension appended to names given for new contact files.
pub const CONTACTS_EXTENSION: &str = "csv";

/// How the user picked the contacts file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChoice {
    Existing(PathBuf),
    New { directory: PathBuf, name: String },
}

impl FileChoice {
    /// The file this choice points at, or `None` when the path or name is blank.
    pub fn resolve(&self) -> Option<PathBuf> {
        match self {
            Self::Existing(path) => (!path.as_os_str().is_empty()).then(|| path.clone()),
            Self::New { directory, name } => {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(directory.join(format!("{name}.{CONTACTS_EXTENSION}")))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed(Contact),
    NoSelection,
    OutOfRange,
}

impl App {
    /// Appends the current form values as a new contact.
    pub fn add_contact(&mut self) -> usize {
        let fields = self.form.fields();
        self.add(fields)
    }

    /// Appends a contact built from the six column values and returns its row.
    pub fn add(&mut self, fields: [String; 6]) -> usize {
        let contact = Contact::from_fields(fields);
        debug!(name = %contact.name, "adding contact");

        self.store.append(contact);
        let row = self.store.len() - 1;
        self.selected_row = Some(row);
        self.refresh_table();
        self.status_message = format!("Added contact #{row}");
        row
    }

    /// Removes the contact at `selected`. Missing selections and stale indices
    /// leave the store untouched and report nothing to the user.
    pub fn delete(&mut self, selected: Option<usize>) -> DeleteOutcome {
        let Some(index) = selected else {
            return DeleteOutcome::NoSelection;
        };

        match self.store.remove_at(index) {
            Ok(contact) => {
                info!(index, name = %contact.name, "deleted contact");
                self.refresh_table();
                self.status_message = format!("Deleted {}", contact.name);
                DeleteOutcome::Removed(contact)
            }
            Err(StoreError::IndexOutOfBounds { index, len }) => {
                debug!(index, len, "ignoring delete outside the store");
                DeleteOutcome::OutOfRange
            }
        }
    }

    pub fn delete_selected(&mut self) -> DeleteOutcome {
        self.delete(self.selected_row)
    }

    /// Clears the typed form fields and the region choice. Contacts and the
    /// chosen country stay as they are.
    pub fn clear_inputs(&mut self) {
        let form = &mut self.form;
        form.name.clear();
        form.phone.clear();
        form.street.clear();
        form.city.clear();
        form.region_index = None;
        form.region_text.clear();
    }

    /// Sets the form country and reloads the region list from the catalog.
    pub fn select_country(&mut self, name: &str) {
        self.form.country = name.to_string();
        self.form.region_text.clear();

        match self.catalog.regions(name) {
            Ok(regions) => {
                self.form.region_index = (!regions.is_empty()).then_some(0);
                self.form.regions = regions;
            }
            Err(e) => {
                warn!(country = name, error = %e, "region lookup failed");
                self.form.regions.clear();
                self.form.region_index = None;
                self.set_error(e);
            }
        }
    }

    /// Refilters the country picker after the query changed.
    pub fn update_country_filter(&mut self) {
        self.form.country_matches = filter_countries(&self.countries, &self.form.country_query);
        self.form.country_index = 0;
        self.sync_highlighted_country();
    }

    pub fn cycle_country(&mut self, forward: bool) {
        let len = self.form.country_matches.len();
        if len == 0 {
            return;
        }

        self.form.country_index = if forward {
            (self.form.country_index + 1) % len
        } else {
            (self.form.country_index + len - 1) % len
        };
        self.sync_highlighted_country();
    }

    fn sync_highlighted_country(&mut self) {
        if let Some(country) = self.form.highlighted_country().map(str::to_string) {
            if country != self.form.country {
                self.select_country(&country);
            }
        }
    }

    /// Resolves `choice`, loads that file into the store and switches to the
    /// contacts screen. Loaded contacts are added after any already in the store.
    pub async fn choose_file(&mut self, choice: FileChoice) -> Result<LoadReport, PersistenceError> {
        let Some(path) = choice.resolve() else {
            self.status_message = "No file chosen".to_string();
            return Ok(LoadReport::default());
        };

        info!(path = %path.display(), "contacts file chosen");
        let previous = (self.file_path.replace(path.clone()), self.session);
        self.session = SessionState::FileChosen;

        let report = match persistence::load(&path).await {
            Ok(report) => report,
            Err(e) => {
                // Keep saving to the file that was open before.
                (self.file_path, self.session) = previous;
                self.set_error(&e);
                return Err(e);
            }
        };

        self.store.extend(report.records.iter().cloned());
        self.refresh_table();
        self.session = SessionState::Loaded;
        self.screen = AppScreen::Contacts;
        self.focus = Focus::Table;
        self.status_message = load_message(&path, &report);

        Ok(report)
    }

    /// Writes the store to the chosen file and stops the session. If nothing was
    /// ever chosen the session ends without writing. A failed write keeps the
    /// session running so the user can pick another file.
    pub async fn exit(&mut self) -> Result<(), PersistenceError> {
        let Some(path) = self.file_path.clone() else {
            warn!("exiting without a contacts file; nothing saved");
            self.running = false;
            return Ok(());
        };

        if let Err(e) = self.save_to(&path).await {
            self.set_error(format!("{e}. Press 'o' to choose another file."));
            return Err(e);
        }

        self.session = SessionState::SavedOnExit;
        self.running = false;
        Ok(())
    }

    async fn save_to(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save(path, &self.store.snapshot()).await
    }
}

fn load_message(path: &Path, report: &LoadReport) -> String {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    if report.created {
        return format!("Created {name}");
    }

    match &report.stopped_at {
        Some(stop) => format!(
            "Loaded {} contacts from {name}; skipped the rest ({stop})",
            report.records.len()
        ),
        None => format!("Loaded {} contacts from {name}", report.records.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;
    use crate::table::TableModel;
    use tempfile::TempDir;

    fn test_app() -> App {
        let catalog = EmbeddedCatalog::from_json(
            r#"{"countries":[
                {"name":"Canada","regions":["Ontario","Alberta"]},
                {"name":"Monaco"},
                {"name":"United States","regions":["Illinois","Texas"]}
            ]}"#,
        )
        .unwrap();
        App::new(Box::new(catalog), PathBuf::from("."))
    }

    fn fields(name: &str) -> [String; 6] {
        [name, "555-1234", "1 Main St", "Springfield", "Illinois", "United States"]
            .map(str::to_string)
    }

    #[test]
    fn first_country_is_preselected() {
        let app = test_app();

        assert_eq!(app.form.country, "Canada");
        assert_eq!(app.form.regions, ["Alberta", "Ontario"]);
        assert_eq!(app.form.region(), "Alberta");
    }

    #[test]
    fn add_appends_last_row() {
        let mut app = test_app();
        app.add(fields("r0"));

        let row = app.add(fields("Alice"));

        assert_eq!(row, 1);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.table.row_count(), 2);
        assert_eq!(app.table.cell(1, 0), Some("Alice"));
        assert_eq!(app.selected_row, Some(1));
    }

    #[test]
    fn add_contact_uses_form_values() {
        let mut app = test_app();
        app.form.name = "Bob".to_string();
        app.select_country("United States");
        app.form.next_region();

        app.add_contact();

        let contact = app.store.get(0).unwrap();
        assert_eq!(contact.name, "Bob");
        assert_eq!(contact.region, "Texas");
        assert_eq!(contact.country, "United States");
    }

    #[test]
    fn delete_middle_row() {
        let mut app = test_app();
        for name in ["r0", "r1", "r2"] {
            app.add(fields(name));
        }

        let outcome = app.delete(Some(1));

        assert!(matches!(outcome, DeleteOutcome::Removed(c) if c.name == "r1"));
        let names: Vec<_> = app.store.snapshot().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, ["r0", "r2"]);
        assert_eq!(app.table.row_count(), 2);
    }

    #[test]
    fn delete_without_selection_is_silent() {
        let mut app = test_app();

        assert_eq!(app.delete_selected(), DeleteOutcome::NoSelection);
        assert_eq!(app.delete(Some(0)), DeleteOutcome::OutOfRange);
        assert!(app.store.is_empty());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn delete_last_row_moves_selection_up() {
        let mut app = test_app();
        app.add(fields("r0"));
        app.add(fields("r1"));

        app.delete_selected();

        assert_eq!(app.selected_row, Some(0));
        app.delete_selected();
        assert_eq!(app.selected_row, None);
    }

    #[test]
    fn clear_inputs_keeps_store_and_country() {
        let mut app = test_app();
        app.add(fields("r0"));
        app.form.name = "typed".to_string();
        app.form.city = "somewhere".to_string();

        app.clear_inputs();

        assert!(app.form.name.is_empty());
        assert!(app.form.city.is_empty());
        assert_eq!(app.form.region(), "");
        assert_eq!(app.form.country, "Canada");
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn unknown_country_falls_back_to_free_text_region() {
        let mut app = test_app();

        app.select_country("Atlantis");

        assert!(app.form.regions.is_empty());
        assert!(app.status_message.starts_with("Error"));
        app.form.field = crate::app::state::FormField::Region;
        app.form.text_mut().unwrap().push_str("Lost City");
        assert_eq!(app.form.region(), "Lost City");
    }

    #[test]
    fn country_filter_selects_best_match() {
        let mut app = test_app();
        app.form.country_query = "states".to_string();

        app.update_country_filter();

        assert_eq!(app.form.country, "United States");
        assert_eq!(app.form.region(), "Illinois");
    }

    #[test]
    fn new_file_choice_appends_extension() {
        let choice = FileChoice::New {
            directory: PathBuf::from("/tmp/book"),
            name: " friends ".to_string(),
        };
        assert_eq!(choice.resolve(), Some(PathBuf::from("/tmp/book/friends.csv")));

        let blank = FileChoice::New {
            directory: PathBuf::from("/tmp"),
            name: "  ".to_string(),
        };
        assert_eq!(blank.resolve(), None);
        assert_eq!(FileChoice::Existing(PathBuf::new()).resolve(), None);
    }

    #[tokio::test]
    async fn test_choose_then_exit_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let mut app = test_app();

        let report = app
            .choose_file(FileChoice::New {
                directory: dir.path().to_path_buf(),
                name: "book".to_string(),
            })
            .await?;
        assert!(report.created);
        assert_eq!(app.session, SessionState::Loaded);
        assert_eq!(app.screen, AppScreen::Contacts);

        app.add(fields("Alice"));
        app.exit().await?;
        assert!(!app.running);
        assert_eq!(app.session, SessionState::SavedOnExit);

        let mut reopened = test_app();
        reopened
            .choose_file(FileChoice::Existing(dir.path().join("book.csv")))
            .await?;
        assert_eq!(reopened.store.len(), 1);
        assert_eq!(reopened.table.cell(0, 0), Some("Alice"));

        Ok(())
    }

    #[tokio::test]
    async fn test_exit_without_file_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = test_app();
        app.add(fields("Alice"));

        app.exit().await?;

        assert!(!app.running);
        assert_eq!(app.session, SessionState::NoFilePath);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_save_keeps_session_open() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let mut app = test_app();
        // A directory cannot be overwritten as a file.
        app.file_path = Some(dir.path().to_path_buf());
        app.session = SessionState::Loaded;

        assert!(app.exit().await.is_err());
        assert!(app.running);
        assert!(app.status_message.starts_with("Error"));
        Ok(())
    }
}
