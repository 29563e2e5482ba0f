//! Terminal runner for the strictly_minimax engine.
//!
//! The binary is a thin shell over [`runner`]; the pieces live in a
//! library so the game loop can be driven from tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Command};
pub use config::{ConfigError, RunnerConfig};
