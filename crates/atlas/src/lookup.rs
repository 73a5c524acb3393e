use anyhow::Result;
use atlas_restcountries::{
    CountriesClient, CountryDetailDisplay, CountryListDisplay, CountrySource, NOT_FOUND_NOTICE,
    SearchOutcome, TOO_MANY_NOTICE, classify,
};
use atlas_ui::{Spinner, Style, StyledText, get_terminal_size, icons, truncate_text};
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
#[command(about = "Look up a country by name")]
pub struct LookupArgs {
    #[arg(help = "The country name to look up")]
    name: String,

    #[arg(long, help = "Return results in JSON format")]
    json: bool,
}

pub fn execute(args: LookupArgs) -> Result<()> {
    let query = args.name.trim();

    // Nothing to look up. Mirrors the interactive mode, which clears its
    // output and stops without issuing a request.
    if query.is_empty() {
        return Ok(());
    }

    let client = CountriesClient::new()?;

    let spinner = Spinner::builder(format!("Searching for {query}...")).start();
    let result = client.search(query);
    spinner.clear();

    let countries = match result {
        Ok(countries) => countries,
        Err(e) => {
            log::warn!("lookup for {query:?} failed: {e}");
            println!("{} {}", icons::error(), NOT_FOUND_NOTICE);
            return Ok(());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&countries)?);
        return Ok(());
    }

    match classify(countries) {
        SearchOutcome::TooMany(count) => {
            println!(
                "{} {} {}",
                icons::warning(),
                TOO_MANY_NOTICE,
                format!("({count} matches)").styled(Style::Muted)
            );
        }
        SearchOutcome::Matches(countries) => {
            println!(
                "{} {} countries match:",
                "Found".green().bold(),
                countries.len()
            );
            let width = get_terminal_size().width;
            for line in CountryListDisplay::new(&countries).to_cli_lines() {
                println!("  {}", truncate_text(&line, width.saturating_sub(2)));
            }
        }
        SearchOutcome::Single(detail) => {
            for line in CountryDetailDisplay::new(&detail).to_cli_lines() {
                println!("{line}");
            }
        }
    }

    Ok(())
}
