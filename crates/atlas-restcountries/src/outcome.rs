//! Response classification

use crate::country::{Country, CountryDetail, CountrySummary};

/// Largest result set rendered as a disambiguation list
pub const MAX_LISTED_MATCHES: usize = 10;

/// What a successful lookup renders as
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// More than [`MAX_LISTED_MATCHES`] hits: ask the user to narrow the query
    TooMany(usize),
    /// Up to [`MAX_LISTED_MATCHES`] hits: name-only disambiguation list
    Matches(Vec<CountrySummary>),
    /// Exactly one hit: full detail panel
    Single(Box<CountryDetail>),
}

/// Classify a successful response body by its cardinality.
///
/// A zero-length body never occurs against the real API (it answers
/// no-match with a 404, which takes the failure path instead); if one shows
/// up anyway it falls through to an empty `Matches` list.
pub fn classify(mut countries: Vec<Country>) -> SearchOutcome {
    match countries.len() {
        n if n > MAX_LISTED_MATCHES => SearchOutcome::TooMany(n),
        1 => {
            let country = countries.remove(0);
            SearchOutcome::Single(Box::new(country.into()))
        }
        _ => SearchOutcome::Matches(countries.iter().map(CountrySummary::from).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str) -> Country {
        Country {
            name: name.to_string(),
            capital: String::new(),
            population: 0,
            languages: Vec::new(),
            flag: String::new(),
        }
    }

    fn countries(n: usize) -> Vec<Country> {
        (0..n).map(|i| country(&format!("Country {i}"))).collect()
    }

    #[test]
    fn test_single_match_becomes_detail() {
        match classify(countries(1)) {
            SearchOutcome::Single(detail) => assert_eq!(detail.name, "Country 0"),
            other => panic!("expected Single, got {other:?}"),
        }
    }

    #[test]
    fn test_two_to_ten_matches_become_list() {
        for n in [2, 5, 10] {
            match classify(countries(n)) {
                SearchOutcome::Matches(list) => {
                    assert_eq!(list.len(), n);
                    // Response order is preserved
                    assert_eq!(list[0].name, "Country 0");
                    assert_eq!(list[n - 1].name, format!("Country {}", n - 1));
                }
                other => panic!("expected Matches for n={n}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_eleven_matches_are_too_many() {
        assert_eq!(classify(countries(11)), SearchOutcome::TooMany(11));
        assert_eq!(classify(countries(250)), SearchOutcome::TooMany(250));
    }

    #[test]
    fn test_empty_body_is_an_empty_list() {
        assert_eq!(classify(Vec::new()), SearchOutcome::Matches(Vec::new()));
    }
}
