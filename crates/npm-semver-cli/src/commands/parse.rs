//! Parse command - strict version parsing.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use npm_semver::Version;
use serde::Serialize;

use super::Output;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse (e.g. 1.2.3-rc.1+build.5)
    pub version: String,
}

#[derive(Debug, Serialize)]
struct ParsedVersion<'a> {
    version: &'a Version,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: &'a [String],
    build: &'a [String],
}

pub fn execute(args: ParseArgs, output: Output) -> Result<i32> {
    let version = Version::parse(&args.version)
        .with_context(|| format!("Invalid version \"{}\"", args.version))?;

    if output.json {
        output.print_json(&ParsedVersion {
            version: &version,
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            prerelease: &version.prerelease,
            build: &version.build,
        })?;
        return Ok(0);
    }

    println!("{}  {}", "version".green(), version);
    println!("{}    {}", "major".green(), version.major);
    println!("{}    {}", "minor".green(), version.minor);
    println!("{}    {}", "patch".green(), version.patch);
    if version.is_prerelease() {
        println!("{}      {}", "pre".green(), version.prerelease.join("."));
    }
    if !version.build.is_empty() {
        println!("{}    {}", "build".green(), version.build.join("."));
    }

    Ok(0)
}
