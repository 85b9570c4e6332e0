use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "contact-book", version, about = "Contact book TUI")]
pub struct CliArgs {
    /// Print the contacts and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Open this contacts file instead of asking
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Directory the file prompt starts in
    #[arg(long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Country/region catalog (JSON) to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    /// Flags win over `.env` and the environment by overwriting the variables
    /// the config layer reads.
    pub fn apply_env_overrides(&self) {
        if let Some(file) = &self.file {
            std::env::set_var("CONTACTS_FILE", file);
        }
        if let Some(dir) = &self.dir {
            std::env::set_var("CONTACTS_DIR", dir);
        }
        if let Some(catalog) = &self.catalog {
            std::env::set_var("CONTACTS_CATALOG", catalog);
        }
        if let Some(log_file) = &self.log_file {
            std::env::set_var("CONTACTS_LOG", log_file);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_and_headless_flags() {
        let args = CliArgs::parse_from([
            "contact-book",
            "--headless",
            "--json",
            "--file",
            "book.csv",
            "--log-file",
            "contacts.log",
        ]);

        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.file.as_deref(), Some("book.csv"));
        assert_eq!(args.log_file.as_deref(), Some("contacts.log"));
        assert_eq!(args.catalog, None);
    }
}
