//! CLI module
//!
//! Command-line interface for querying the API.
//!
//! # Commands
//!
//! - `fact` - Print one random fact
//! - `breeds` - Print every breed
//! - `facts` - Print every fact

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
