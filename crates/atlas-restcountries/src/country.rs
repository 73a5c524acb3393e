//! Wire model for REST Countries v2 responses

use serde::{Deserialize, Serialize};

/// One spoken language on a country record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

/// A country record as returned by the v2 `name` endpoint.
///
/// Only `name` is always present; small territories omit `capital` or
/// `population`, so every other field defaults instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub flag: String,
}

/// Name-only view used for multi-match list rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub name: String,
}

impl From<&Country> for CountrySummary {
    fn from(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
        }
    }
}

/// Full record used for single-match detail rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub name: String,
    pub capital: String,
    pub population: u64,
    pub languages: Vec<Language>,
    pub flag: String,
}

impl From<Country> for CountryDetail {
    fn from(country: Country) -> Self {
        Self {
            name: country.name,
            capital: country.capital,
            population: country.population,
            languages: country.languages,
            flag: country.flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v2_response() {
        let body = r#"[
            {
                "name": "Poland",
                "capital": "Warsaw",
                "population": 38000000,
                "languages": [{"name": "Polish", "iso639_1": "pl"}],
                "flag": "https://flag.example/pl.png",
                "region": "Europe"
            }
        ]"#;

        let countries: Vec<Country> = serde_json::from_str(body).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "Poland");
        assert_eq!(countries[0].capital, "Warsaw");
        assert_eq!(countries[0].population, 38000000);
        assert_eq!(countries[0].languages, vec![Language { name: "Polish".to_string() }]);
        assert_eq!(countries[0].flag, "https://flag.example/pl.png");
    }

    #[test]
    fn test_parse_defaults_absent_fields() {
        // Territories like Bouvet Island come back without capital/languages
        let body = r#"[{"name": "Bouvet Island"}]"#;

        let countries: Vec<Country> = serde_json::from_str(body).unwrap();
        assert_eq!(countries[0].name, "Bouvet Island");
        assert_eq!(countries[0].capital, "");
        assert_eq!(countries[0].population, 0);
        assert!(countries[0].languages.is_empty());
        assert_eq!(countries[0].flag, "");
    }

    #[test]
    fn test_detail_keeps_all_fields() {
        let country = Country {
            name: "Poland".to_string(),
            capital: "Warsaw".to_string(),
            population: 38000000,
            languages: vec![Language { name: "Polish".to_string() }],
            flag: "https://flag.example/pl.png".to_string(),
        };

        let detail = CountryDetail::from(country.clone());
        assert_eq!(detail.name, country.name);
        assert_eq!(detail.capital, country.capital);
        assert_eq!(detail.population, country.population);
        assert_eq!(detail.languages, country.languages);
        assert_eq!(detail.flag, country.flag);
    }
}
