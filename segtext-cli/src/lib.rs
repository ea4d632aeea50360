//! segtext CLI library
//!
//! This library provides the command-line interface for formatting values
//! into grouped display text and stripping them back.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
