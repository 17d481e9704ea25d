//! # bidparams CLI entry point
//!
//! Parses command-line arguments, builds the bidder registry once, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use bidparams_cli::bidders::{run_bidders, BiddersArgs};
use bidparams_cli::check::{run_check, CheckArgs};
use bidparams_cli::schema::{run_schema, SchemaArgs};
use bidparams_cli::validate::{run_validate, ValidateArgs};
use bidparams_core::BidderRegistry;
use bidparams_schema::{ValidatorConfig, DEFAULT_SCHEMA_DIR};

/// Bidder param schema tooling.
///
/// Loads per-bidder JSON Schemas the way the auction server does at startup
/// and validates `imp[].ext.<bidder>` payloads against them.
#[derive(Parser, Debug)]
#[command(name = "bidparams", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Directory of `<bidder>.json` schema documents.
    #[arg(long, global = true, env = "BIDPARAMS_SCHEMA_DIR", default_value = DEFAULT_SCHEMA_DIR)]
    schema_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Log line format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line, for log collectors.
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the schema directory and report bound and missing bidders.
    Check(CheckArgs),

    /// Validate one bidder payload from a file or stdin.
    Validate(ValidateArgs),

    /// Print the schema bound to a bidder.
    Schema(SchemaArgs),

    /// List every registered bidder.
    Bidders(BiddersArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let registry = BidderRegistry::new();
    let config = ValidatorConfig::new(cli.schema_dir);
    tracing::debug!(schema_dir = %config.schema_dir.display(), bidders = registry.len(), "starting");

    let mut out = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &registry, &config, &mut out),
        Commands::Validate(args) => run_validate(&args, &registry, &config, &mut out),
        Commands::Schema(args) => run_schema(&args, &registry, &config, &mut out),
        Commands::Bidders(args) => run_bidders(&args, &registry, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
