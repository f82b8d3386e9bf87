//! Coerce command - extract a version from free-form text.

use anyhow::Result;
use clap::Args;

use super::{Output, NO_MATCH};

#[derive(Args, Debug)]
pub struct CoerceArgs {
    /// Text containing a version (e.g. "v2", "release 1.4 final")
    pub text: String,
}

pub fn execute(args: CoerceArgs, output: Output) -> Result<i32> {
    let coerced = npm_semver::coerce(&args.text);

    if output.json {
        output.print_json(&coerced)?;
    } else if let Some(version) = &coerced {
        println!("{}", version);
    }

    match coerced {
        Some(_) => Ok(0),
        None => {
            log::info!("No version found in \"{}\"", args.text);
            Ok(NO_MATCH)
        }
    }
}
