//! Command implementations
//!
//! One module per subcommand; `main` dispatches here after parsing.

pub mod browse;
pub mod list;
