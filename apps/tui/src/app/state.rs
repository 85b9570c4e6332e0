use crate::catalog::LocationCatalog;
use crate::store::ContactStore;
use crate::table::ContactTable;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    FilePrompt,
    Contacts,
}

/// Which half of the contacts screen receives keys.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Table,
    Form,
}

/// Session lifecycle: a file must be chosen and loaded before anything can be saved.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionState {
    NoFilePath,
    FileChosen,
    Loaded,
    SavedOnExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Street,
    City,
    Country,
    Region,
    Submit,
}

impl FormField {
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Street,
            Self::Street => Self::City,
            Self::City => Self::Country,
            Self::Country => Self::Region,
            Self::Region => Self::Submit,
            Self::Submit => Self::Name,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Submit,
            Self::Phone => Self::Name,
            Self::Street => Self::Phone,
            Self::City => Self::Street,
            Self::Country => Self::City,
            Self::Region => Self::Country,
            Self::Submit => Self::Region,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Street => "Street",
            Self::City => "City",
            Self::Country => "Country",
            Self::Region => "State",
            Self::Submit => "Add contact",
        }
    }
}

/// Transient values of the add-contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub field: FormField,
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    /// Text typed into the country field, used to filter `country_matches`.
    pub country_query: String,
    pub country_matches: Vec<String>,
    pub country_index: usize,
    pub country: String,
    pub regions: Vec<String>,
    pub region_index: Option<usize>,
    /// Region typed by hand when the country has no known regions.
    pub region_text: String,
}

impl ContactForm {
    pub fn new(countries: Vec<String>) -> Self {
        Self {
            field: FormField::Name,
            name: String::new(),
            phone: String::new(),
            street: String::new(),
            city: String::new(),
            country_query: String::new(),
            country_matches: countries,
            country_index: 0,
            country: String::new(),
            regions: Vec::new(),
            region_index: None,
            region_text: String::new(),
        }
    }

    /// Country under the picker cursor, if the filter matches anything.
    pub fn highlighted_country(&self) -> Option<&str> {
        self.country_matches
            .get(self.country_index)
            .map(String::as_str)
    }

    pub fn region(&self) -> &str {
        if self.regions.is_empty() {
            return &self.region_text;
        }

        self.region_index
            .and_then(|index| self.regions.get(index))
            .map_or("", String::as_str)
    }

    pub fn next_region(&mut self) {
        if self.regions.is_empty() {
            return;
        }
        self.region_index = Some(
            self.region_index
                .map_or(0, |index| (index + 1) % self.regions.len()),
        );
    }

    pub fn prev_region(&mut self) {
        if self.regions.is_empty() {
            return;
        }
        let len = self.regions.len();
        self.region_index = Some(self.region_index.map_or(0, |index| (index + len - 1) % len));
    }

    /// The six values the form would submit, in column order.
    pub fn fields(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.phone.clone(),
            self.street.clone(),
            self.city.clone(),
            self.region().to_string(),
            self.country.clone(),
        ]
    }

    /// Text buffer behind the focused field, for fields typed character by character.
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::Phone => Some(&mut self.phone),
            FormField::Street => Some(&mut self.street),
            FormField::City => Some(&mut self.city),
            FormField::Country => Some(&mut self.country_query),
            FormField::Region if self.regions.is_empty() => Some(&mut self.region_text),
            FormField::Region | FormField::Submit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    /// "Existing" or "New".
    Choose,
    ExistingPath,
    NewDirectory,
    NewName,
}

#[derive(Debug, Clone)]
pub struct FilePromptState {
    pub step: PromptStep,
    pub choice_index: usize,
    pub input: String,
    pub directory: String,
}

impl FilePromptState {
    pub const CHOICES: [&'static str; 2] = ["Existing", "New"];

    pub const fn new() -> Self {
        Self {
            step: PromptStep::Choose,
            choice_index: 0,
            input: String::new(),
            directory: String::new(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub focus: Focus,
    pub show_help: bool,
    pub status_message: String,
    pub session: SessionState,
    pub file_path: Option<PathBuf>,
    pub store: ContactStore,
    pub table: ContactTable,
    pub selected_row: Option<usize>,
    pub form: ContactForm,
    pub prompt: FilePromptState,
    pub catalog: Box<dyn LocationCatalog>,
    pub countries: Vec<String>,
    pub start_dir: PathBuf,
}

impl App {
    pub fn new(catalog: Box<dyn LocationCatalog>, start_dir: PathBuf) -> Self {
        let countries = catalog.countries();
        let mut app = Self {
            running: true,
            screen: AppScreen::FilePrompt,
            focus: Focus::Table,
            show_help: false,
            status_message: String::new(),
            session: SessionState::NoFilePath,
            file_path: None,
            store: ContactStore::new(),
            table: ContactTable::default(),
            selected_row: None,
            form: ContactForm::new(countries.clone()),
            prompt: FilePromptState::new(),
            catalog,
            countries,
            start_dir,
        };

        if let Some(first) = app.form.highlighted_country().map(str::to_string) {
            app.select_country(&first);
        }

        app
    }

    /// Rebuilds the table from the store and keeps the selection in range.
    pub fn refresh_table(&mut self) {
        self.table.rebuild(self.store.snapshot());

        let len = self.store.len();
        self.selected_row = match self.selected_row {
            _ if len == 0 => None,
            Some(row) if row >= len => Some(len - 1),
            Some(row) => Some(row),
            None => Some(0),
        };
    }

    /// Resets the file prompt and shows it.
    pub fn open_file_prompt(&mut self) {
        self.prompt = FilePromptState::new();
        self.screen = AppScreen::FilePrompt;
    }

    pub fn set_error(&mut self, message: impl std::fmt::Display) {
        self.status_message = format!("Error: {message}");
    }
}
