//! Brewdir CLI application entry point
//!
//! A terminal directory of US microbreweries fed by the Open Brewery DB
//! listing, with a fixed built-in collection standing in whenever the remote
//! read fails.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! brewdir
//! brewdir browse
//!
//! # Print one page of the table
//! brewdir list
//!
//! # Search, sort, and print everything that matches
//! brewdir list --search california --sort state --desc --all
//!
//! # Work entirely from the built-in data
//! brewdir --offline list
//!
//! # Quiet mode (tab-separated rows, no headers or warnings)
//! brewdir -q list --all
//! ```

use brewdir::{
    BrewdirError,
    cli::{Cli, Commands},
    commands,
};
use colored::Colorize;

type Result<T> = std::result::Result<T, BrewdirError>;

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command() {
        Commands::Browse { page_size } => commands::browse::run(&cli, page_size),
        Commands::List {
            search,
            sort,
            desc,
            page,
            page_size,
            all,
        } => commands::list::run(
            &cli,
            &commands::list::ListOptions {
                search,
                sort,
                desc,
                page,
                page_size,
                all,
            },
        ),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
