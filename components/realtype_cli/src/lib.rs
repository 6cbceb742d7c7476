//! Type inspection CLI library
//!
//! Provides the Inspector struct and supporting modules for the `realtype`
//! command-line tool.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod inspector;
pub mod literal;
pub mod self_check;

pub use cli::{Cli, Mode};
pub use error::{CliError, CliResult};
pub use inspector::Inspector;
pub use literal::{parse_value, parse_values, LiteralError, MAX_DEPTH};
