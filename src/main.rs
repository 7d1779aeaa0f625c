use std::{fs, process::ExitCode};

use clap::Parser;
use letcalc::{evaluate_top_level, get_result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// letcalc evaluates integer expressions built from add, sub, mult, div and
/// let, such as `let(a, 5, add(a, a))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells letcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Logs every evaluation step to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Hands the expression to the evaluator as is, without checking brackets
    /// or removing whitespace first.
    #[arg(long)]
    raw: bool,

    contents: String,
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the
/// `--verbose` flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let expression = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let result = if args.raw {
        evaluate_top_level(&expression)
    } else {
        get_result(&expression)
    };

    match result {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            debug!(kind = %e.kind(), "evaluation failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
