use anyhow::Result;
use atlas_restcountries::{CountriesClient, tui};
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Search for countries interactively")]
pub struct SearchArgs {}

pub fn execute(_args: SearchArgs) -> Result<()> {
    let client = CountriesClient::new()?;
    tui::run(client)
}
