mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::Output;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "npm-semver")]
#[command(about = "Parse, compare and match versions using npm range syntax")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Working directory (where the npm-semver.toml search starts)
    #[arg(short = 'd', long, global = true, default_value = ".")]
    working_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a version strictly and print its components
    Parse(commands::parse::ParseArgs),

    /// Parse a range and print its normalized form
    Range(commands::range::RangeArgs),

    /// Print the versions that satisfy a range
    Satisfies(commands::satisfies::SatisfiesArgs),

    /// Sort versions by precedence
    Sort(commands::sort::SortArgs),

    /// Extract a version from arbitrary text
    Coerce(commands::coerce::CoerceArgs),
}

/// RUST_LOG wins, then --verbose, then the config file, then "warn"
fn log_filters(rust_log: Option<String>, verbose: bool, config: &Config) -> String {
    rust_log
        .or_else(|| verbose.then(|| "debug".to_string()))
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "warn".to_string())
}

fn init_logger(verbose: bool, config: &Config) {
    let filters = log_filters(std::env::var("RUST_LOG").ok(), verbose, config);

    env_logger::Builder::new()
        .parse_filters(&filters)
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();

    let working_dir = args
        .working_dir
        .canonicalize()
        .context("Failed to resolve working directory")?;

    let loaded = Config::load(&working_dir)?;
    let config = loaded.as_ref().map(|(_, c)| c);
    let default_config = Config::default();
    let config = config.unwrap_or(&default_config);

    init_logger(args.verbose, config);
    if let Some((path, _)) = &loaded {
        log::debug!("Loaded configuration from {}", path.display());
    }

    let output = Output {
        json: args.json || config.output.json,
    };

    match args.command {
        Commands::Parse(cmd) => commands::parse::execute(cmd, output),
        Commands::Range(cmd) => commands::range::execute(cmd, output),
        Commands::Satisfies(cmd) => commands::satisfies::execute(cmd, output),
        Commands::Sort(cmd) => commands::sort::execute(cmd, output, config.output.reverse),
        Commands::Coerce(cmd) => commands::coerce::execute(cmd, output),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}
