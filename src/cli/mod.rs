//! Command line interface module
//!
//! Parses the three positional arguments plus optional flags and runs the
//! prune pipeline. This is the only layer that reads the environment.

pub mod args;
pub mod runner;

pub use args::Args;
pub use runner::Runner;
