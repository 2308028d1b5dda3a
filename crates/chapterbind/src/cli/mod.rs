//! Command-line interface module.
//!
//! This module provides the argument parser and the run handler for the
//! chapterbind binary.

mod args;
mod bind;

pub use args::Cli;
pub use bind::{BindReport, bind, bind_with};
