//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;
use npm_semver::{Semver, Version};

use super::Output;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort from highest to lowest
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs, output: Output, reverse_by_default: bool) -> Result<i32> {
    for text in &args.versions {
        if let Err(err) = Version::parse(text) {
            log::warn!("Ignoring invalid version \"{}\": {}", text, err);
        }
    }

    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse || reverse_by_default {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    };

    if output.json {
        output.print_json(&sorted)?;
    } else {
        for version in &sorted {
            println!("{}", version);
        }
    }

    Ok(0)
}
