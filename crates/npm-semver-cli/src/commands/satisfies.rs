//! Satisfies command - filter versions through a range.

use anyhow::{Context, Result};
use clap::Args;
use npm_semver::{Matcher, Semver, Version};

use super::{Output, NO_MATCH};

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Range expression to test against
    pub range: String,

    /// Versions to test
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Print only the highest satisfying version
    #[arg(long, conflicts_with = "min")]
    pub max: bool,

    /// Print only the lowest satisfying version
    #[arg(long)]
    pub min: bool,
}

pub fn execute(args: SatisfiesArgs, output: Output) -> Result<i32> {
    let matcher = Matcher::parse(&args.range)
        .with_context(|| format!("Invalid range \"{}\"", args.range))?;
    log::debug!("normalized range: {}", matcher);

    for text in &args.versions {
        if let Err(err) = Version::parse(text) {
            log::warn!("Ignoring invalid version \"{}\": {}", text, err);
        }
    }

    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let matching: Vec<String> = if args.max {
        Semver::max_satisfying(&versions, &args.range).into_iter().collect()
    } else if args.min {
        Semver::min_satisfying(&versions, &args.range).into_iter().collect()
    } else {
        Semver::satisfied_by(&versions, &args.range)
    };

    if output.json {
        output.print_json(&matching)?;
    } else {
        for text in &matching {
            println!("{}", text);
        }
    }

    if matching.is_empty() {
        log::info!("No version satisfies \"{}\"", args.range);
        return Ok(NO_MATCH);
    }
    Ok(0)
}
