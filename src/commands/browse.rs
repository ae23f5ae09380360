//! The `browse` command - interactive directory session

use crate::BrewdirError;
use crate::cli::Cli;
use crate::source::Source;
use crate::ui;

/// Launch the interactive table against the configured source
///
/// # Errors
///
/// Returns `BrewdirError` if the terminal session cannot be run.
pub fn run(cli: &Cli, page_size: usize) -> Result<(), BrewdirError> {
    let source = Source::new(cli.endpoint.clone(), cli.offline);
    ui::run(source, page_size)?;
    Ok(())
}
