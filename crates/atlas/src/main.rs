use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod lookup;
mod search;

#[derive(Parser)]
#[command(name = "atlas")]
#[command(about = "Country lookup for your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for countries interactively
    #[command(alias = "s")]
    Search(search::SearchArgs),

    /// Look up a country by name
    #[command(alias = "l")]
    Lookup(lookup::LookupArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default log level depends on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Search(args) => search::execute(args),
        Commands::Lookup(args) => lookup::execute(args),
    }
}
