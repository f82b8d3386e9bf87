//! Subcommand implementations. Each returns the process exit code.

pub mod coerce;
pub mod parse;
pub mod range;
pub mod satisfies;
pub mod sort;

use anyhow::{Context, Result};
use serde::Serialize;

/// How results are written to stdout
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", text);
        Ok(())
    }
}

/// Exit code when a query produced no result. Errors exit with 2.
pub const NO_MATCH: i32 = 1;
