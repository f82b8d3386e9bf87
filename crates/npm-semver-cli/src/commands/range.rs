//! Range command - parse a range and print its normalized form.

use anyhow::{Context, Result};
use clap::Args;
use npm_semver::Matcher;
use serde::Serialize;

use super::Output;

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Range expression (e.g. "^1.2.3 || >=2.0.0 <3")
    pub range: String,
}

#[derive(Debug, Serialize)]
struct NormalizedRange<'a> {
    input: &'a str,
    range: &'a Matcher,
    any: bool,
}

pub fn execute(args: RangeArgs, output: Output) -> Result<i32> {
    let matcher = Matcher::parse(&args.range)
        .with_context(|| format!("Invalid range \"{}\"", args.range))?;

    if output.json {
        output.print_json(&NormalizedRange {
            input: &args.range,
            range: &matcher,
            any: matcher.is_any(),
        })?;
    } else {
        println!("{}", matcher);
    }

    Ok(0)
}
