//! Command-line front end: a REPL when no file is given, a one-shot runner
//! otherwise. Argument parsing follows the same `clap`-derived `Cli` struct
//! convention as `examples/Luvion1-Fax/faxt/src/main.rs`; logging follows
//! the simpler `log`/`env_logger` pairing used elsewhere in the pack rather
//! than `faxt`'s `tracing` stack, since this crate has no structured-field
//! logging needs beyond gating the disassembler trace.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pera::{run_source, PeraError, Runtime};

/// `pera` — a small interpreter for a parenthesized, prefix-notation
/// expression language.
///
/// Run with no arguments for an interactive prompt, or pass a source file
/// to execute it once and exit.
#[derive(Parser, Debug)]
#[command(name = "pera")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small interpreter for a parenthesized, prefix-notation language")]
struct Cli {
    /// Source file to run. Omit to start an interactive REPL.
    path: Option<PathBuf>,

    /// Enable trace-level logging, including a disassembly of every
    /// executed chunk. Equivalent to `RUST_LOG=trace`.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.path {
        Some(path) => run_file(&path),
        None => run_repl(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("pera: {message}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.format_timestamp(None).init();
}

fn run_file(path: &PathBuf) -> Result<(), String> {
    let source = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut runtime = Runtime::new();
    run_source(&source, &mut runtime).map_err(describe)
}

fn run_repl() -> Result<(), String> {
    let mut runtime = Runtime::new();
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush().ok();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        if !line.trim().is_empty() {
            if let Err(e) = run_source(&line, &mut runtime) {
                eprintln!("pera: {}", describe(e));
            }
        }
        print!("> ");
        io::stdout().flush().ok();
    }
    println!();
    Ok(())
}

fn describe(err: PeraError) -> String {
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_a_bare_path() {
        let cli = Cli::parse_from(["pera", "script.pera"]);
        assert_eq!(cli.path, Some(PathBuf::from("script.pera")));
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_no_arguments_as_repl_mode() {
        let cli = Cli::parse_from(["pera"]);
        assert_eq!(cli.path, None);
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::parse_from(["pera", "-v", "script.pera"]);
        assert!(cli.verbose);
    }
}
