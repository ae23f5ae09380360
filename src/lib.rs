//! Brewdir - a searchable, sortable directory of US microbreweries
//!
//! This library loads brewery records from the Open Brewery DB listing
//! (substituting a fixed local collection when the remote read fails), keeps
//! only `micro` breweries, and projects them through a pure
//! search → sort → paginate pipeline for display in a terminal table.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod model;
pub mod output;
pub mod source;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BrewdirError {
    /// Load failure that escaped the fallback path
    #[error("Load error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Terminal session error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
