pub mod client;
pub mod country;
pub mod display;
pub mod outcome;
pub mod tui;

pub use client::{CountriesClient, CountrySource, LookupError};
pub use country::{Country, CountryDetail, CountrySummary, Language};
pub use display::{CountryDetailDisplay, CountryListDisplay};
pub use outcome::{MAX_LISTED_MATCHES, SearchOutcome, classify};

/// Notice shown for any failed lookup (transport error or non-2xx status).
pub const NOT_FOUND_NOTICE: &str = "Country not found";

/// Notice shown when a query matches more countries than we will list.
pub const TOO_MANY_NOTICE: &str = "Too many matches found. Please enter a more specific query!";

fn get_api_base_url() -> String {
    if let Ok(url) = std::env::var("ATLAS_API_URL") {
        return url;
    }

    "https://restcountries.com/v2/name".to_string()
}
