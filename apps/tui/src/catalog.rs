use crate::error::CatalogError;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Deserialize;
use std::path::Path;

const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.json");

/// Read-only source of country names and their first-level regions.
pub trait LocationCatalog: std::fmt::Debug {
    /// All country names, sorted.
    fn countries(&self) -> Vec<String>;

    /// Sorted region names for `country`.
    fn regions(&self, country: &str) -> Result<Vec<String>, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    countries: Vec<CountryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct CountryEntry {
    name: String,
    #[serde(default)]
    regions: Vec<String>,
}

/// Catalog backed by a JSON document of the form
/// `{"countries": [{"name": "...", "regions": ["..."]}]}`.
#[derive(Debug, Clone)]
pub struct EmbeddedCatalog {
    countries: Vec<CountryEntry>,
}

impl EmbeddedCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_LOCATIONS)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut countries = file.countries;

        countries.sort_by(|a, b| a.name.cmp(&b.name));
        for country in &mut countries {
            country.regions.sort();
        }

        Ok(Self { countries })
    }

    fn find(&self, name: &str) -> Option<&CountryEntry> {
        let wanted = name.trim().to_lowercase();
        self.countries
            .iter()
            .find(|country| country.name.to_lowercase() == wanted)
    }
}

impl LocationCatalog for EmbeddedCatalog {
    fn countries(&self) -> Vec<String> {
        self.countries.iter().map(|c| c.name.clone()).collect()
    }

    fn regions(&self, country: &str) -> Result<Vec<String>, CatalogError> {
        self.find(country)
            .map(|entry| entry.regions.clone())
            .ok_or_else(|| CatalogError::UnknownCountry(country.to_string()))
    }
}

/// Country names matching `query`, best match first. An empty query keeps the
/// full list in catalog order.
pub fn filter_countries(countries: &[String], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return countries.to_vec();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, &String)> = countries
        .iter()
        .filter_map(|name| matcher.fuzzy_match(name, query).map(|score| (score, name)))
        .collect();

    // Stable sort keeps alphabetical order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, name)| name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_countries_are_sorted() {
        let catalog = EmbeddedCatalog::builtin().unwrap();
        let countries = catalog.countries();

        assert!(countries.len() > 200);
        assert!(countries.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(countries.iter().any(|c| c == "United States"));
    }

    #[test]
    fn regions_are_sorted_and_lookup_ignores_case() {
        let catalog = EmbeddedCatalog::builtin().unwrap();

        let regions = catalog.regions("united states").unwrap();

        assert!(regions.iter().any(|r| r == "Illinois"));
        assert!(regions.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn country_without_region_data_has_no_regions() {
        let catalog = EmbeddedCatalog::builtin().unwrap();
        assert!(catalog.regions("Monaco").unwrap().is_empty());
    }

    #[test]
    fn unknown_country_is_an_error() {
        let catalog = EmbeddedCatalog::builtin().unwrap();
        let err = catalog.regions("Atlantis").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCountry(name) if name == "Atlantis"));
    }

    #[test]
    fn from_json_sorts_input() {
        let catalog = EmbeddedCatalog::from_json(
            r#"{"countries":[{"name":"Zed","regions":["b","a"]},{"name":"Alpha"}]}"#,
        )
        .unwrap();

        assert_eq!(catalog.countries(), ["Alpha", "Zed"]);
        assert_eq!(catalog.regions("Zed").unwrap(), ["a", "b"]);
    }

    #[test]
    fn filter_puts_best_match_first() {
        let countries = vec![
            "Canada".to_string(),
            "Germany".to_string(),
            "United Kingdom".to_string(),
            "United States".to_string(),
        ];

        let matches = filter_countries(&countries, "states");
        assert_eq!(matches.first().map(String::as_str), Some("United States"));

        assert_eq!(filter_countries(&countries, "  ").len(), 4);
        assert!(filter_countries(&countries, "zzz").is_empty());
    }
}
