use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Runtime settings collected from `.env` and the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Contacts file to open at startup, skipping the file prompt.
    pub contacts_file: Option<PathBuf>,
    /// Directory the file prompt starts from.
    pub start_dir: PathBuf,
    /// JSON catalog replacing the built-in country list.
    pub catalog_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl AppConfig {
    /// Reads the `CONTACTS_*` and `DEBUG` variables from the current environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the real
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        Self {
            contacts_file: path("CONTACTS_FILE"),
            start_dir: path("CONTACTS_DIR").unwrap_or_else(|| PathBuf::from(".")),
            catalog_path: path("CONTACTS_CATALOG"),
            log_file: path("CONTACTS_LOG"),
            debug: lookup("DEBUG").is_some_and(|value| is_truthy(&value)),
        }
    }
}

/// Initializes the application configuration.
/// Loads `.env` first so its values are visible to [`AppConfig::from_env`].
pub fn init_app_config() -> AppConfig {
    dotenv().ok();
    AppConfig::from_env()
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
