//! catalog-admin library
//!
//! Command definitions and execution for the `catalog-admin` binary,
//! exported so they can be driven against any document store in tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;


pub use cli::Cli;
pub use commands::{Commands, execute, render};
pub use error::{AdminError, Result as AdminResult};
