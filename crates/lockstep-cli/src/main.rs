//! lockstep command-line interface.
//!
//! Exit codes: 0 when the tree is consistent (or checking is disabled),
//! 1 when violations were found, 2 on configuration or scan failure.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use lockstep_analysis::{RunReport, Scanner};
use lockstep_core::config::LockstepConfig;
use lockstep_core::events::NoopEventHandler;
use lockstep_core::LockstepErrorCode;

mod report;

const EXIT_CLEAN: i32 = 0;
const EXIT_VIOLATIONS: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "lockstep")]
#[command(about = "Checks feature revision annotations for consistency across a codebase")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a directory tree and report revision conflicts
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// Directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Config file to use instead of <PATH>/lockstep.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the magic-comment pattern from the config
    #[arg(long, value_name = "REGEX")]
    pattern: Option<String>,

    /// Scan thread count (0 = number of cores, 1 = deterministic order)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print diagnostics only, no summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    lockstep_core::tracing::init_tracing();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Check(args) => run_check(&args),
    };
    std::process::exit(code);
}

fn run_check(args: &CheckArgs) -> i32 {
    let mut config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("lockstep: error[{}]: {}", e.error_code(), e);
            return EXIT_ERROR;
        }
    };

    if let Some(pattern) = &args.pattern {
        config.engine.pattern = Some(pattern.clone());
    }
    if let Some(threads) = args.threads {
        config.scan.threads = Some(threads);
    }

    if !config.engine_enabled() {
        tracing::info!("revision checking disabled, skipping scan");
        return EXIT_CLEAN;
    }

    let scanner = match Scanner::new(config) {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("lockstep: error[{}]: {}", e.error_code(), e);
            return EXIT_ERROR;
        }
    };

    let report = match scanner.scan(&args.path, &NoopEventHandler) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("lockstep: error[{}]: {}", e.error_code(), e);
            return EXIT_ERROR;
        }
    };

    print_report(&report, args);

    if report.has_violations() {
        EXIT_VIOLATIONS
    } else {
        EXIT_CLEAN
    }
}

fn load_config(args: &CheckArgs) -> Result<LockstepConfig, lockstep_core::ConfigError> {
    match &args.config {
        Some(path) => LockstepConfig::load(path),
        None => LockstepConfig::load_or_default(&args.path),
    }
}

fn print_report(report: &RunReport, args: &CheckArgs) {
    match args.format {
        OutputFormat::Text => report::print_text(report, args.quiet),
        OutputFormat::Json => report::print_json(report),
    }
}
