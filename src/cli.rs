//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for brewdir using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: interactive searchable table (default)
//! - **list**: print the derived table to stdout for scripting
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--endpoint` / `--offline` to control the data source
//! - Command aliases (`b` for `browse`, `ls` for `list`)
//!
//! All state is transient per invocation: there is no config file, no
//! environment lookup, and nothing persisted between runs.

use crate::source::DEFAULT_ENDPOINT;
use crate::view::state::{DEFAULT_PAGE_SIZE, SortField};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

/// Sortable table column, as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Sort by brewery name
    #[default]
    Name,
    /// Sort by state
    State,
}

// clap renders the default value through Display
impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::State => "state",
        })
    }
}

impl From<SortColumn> for SortField {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => Self::Name,
            SortColumn::State => Self::State,
        }
    }
}

/// A searchable, sortable directory of US microbreweries for the terminal
#[derive(Parser, Debug)]
#[command(name = "brewdir", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Brewery listing endpoint to read from
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Skip the network entirely and use the built-in fallback data
    #[arg(long, global = true)]
    pub offline: bool,

    /// Suppress informational output (warnings, headers, summaries)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to `browse`
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            page_size: DEFAULT_PAGE_SIZE,
        })
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse the directory interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Rows per table page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Print the directory table to stdout
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive substring filter on name or state
        #[arg(short, long)]
        search: Option<String>,

        /// Column to sort by
        #[arg(long, value_enum, default_value_t)]
        sort: SortColumn,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// Zero-based page to print
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Rows per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Print every matching row instead of a single page
        #[arg(long)]
        all: bool,
    },
}
