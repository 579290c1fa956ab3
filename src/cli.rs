//! CLI surface: clap definitions and the run context driving the mutator.

pub mod parse;
pub mod route;

pub use parse::Cli;
pub use route::{map_error, RunContext};
