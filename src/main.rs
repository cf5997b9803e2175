use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use bodmas::{
    check::{CASES, run_checks},
    error::render,
    evaluate,
    util::num::format_value,
};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod repl;

/// bodmas evaluates arithmetic expressions with `+ - * /`, unary signs and
/// parentheses, following the usual order of operations.
///
/// Without an expression, a file or `--check`, an interactive prompt starts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Evaluates every non-empty line of this file as its own expression.
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["check", "expression"])]
    file: Option<PathBuf>,

    /// Runs the built-in self-check table and reports how many cases pass.
    #[arg(short, long, conflicts_with = "expression")]
    check: bool,

    /// Prints results with this many fractional digits.
    #[arg(short, long, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Raises the default log level to debug. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate. Several words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    debug!(?args, "parsed command line");

    if let Some(path) = &args.file {
        return run_file(path, args.precision);
    }

    if args.check {
        return run_check();
    }

    if args.expression.is_empty() {
        return match repl::run(args.precision) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Readline error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let source = args.expression.join(" ");
    run_expression(&source, args.precision)
}

/// Installs the global tracing subscriber, writing to stderr.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "bodmas=debug" } else { "bodmas=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

/// Evaluates a single expression and prints its value or a diagnostic.
fn run_expression(source: &str, precision: Option<usize>) -> ExitCode {
    match evaluate(source) {
        Ok(value) => {
            println!("{}", format_value(value, precision));
            ExitCode::SUCCESS
        },
        Err(e) => {
            debug!(category = %e.category(), "evaluation failed");
            eprintln!("{}", render(&e, source));
            ExitCode::FAILURE
        },
    }
}

/// Evaluates each non-empty line of `path` independently.
fn run_file(path: &Path, precision: Option<usize>) -> ExitCode {
    let script = match fs::read_to_string(path) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };

    let mut failures = 0usize;
    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let number = index + 1;
        match evaluate(line) {
            Ok(value) => println!("line {number}: {}", format_value(value, precision)),
            Err(e) => {
                failures += 1;
                eprintln!("line {number}: {}", render(&e, line));
            },
        }
    }

    info!(path = %path.display(), failures, "finished evaluating file");
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Runs the built-in self-check table.
fn run_check() -> ExitCode {
    let report = run_checks(CASES);
    for outcome in &report.outcomes {
        println!("{outcome}");
    }
    println!("\nChecks passed: {}/{}", report.passed(), report.total());

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        warn!(failed = report.total() - report.passed(), "self-check failures");
        ExitCode::FAILURE
    }
}
