// SPDX-License-Identifier: MIT
//
// n-contrast — check a foreground/background color pair against WCAG AA.
//
//   n-contrast "#3b82f6" "#ffffff"
//   n-contrast --format json 3b82f6 ffffff
//
// Flow:
//
//   argv → clap → n_wcag::check_contrast → Report → stdout
//
// With fewer than two colors the long help is printed and the process exits
// successfully. A malformed color is reported on stderr with exit status 1.
// Logging goes to stderr; RUST_LOG overrides the level chosen by --debug.

mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use report::{Format, Report};

const REQUIREMENTS: &str = "\
Example:
  n-contrast \"#3b82f6\" \"#ffffff\"

WCAG AA Requirements:
  Normal text: 4.5:1
  Large text:  3:1 (18pt or 14pt bold)
  UI elements: 3:1";

/// Color Contrast Checker: test a color pair against WCAG AA contrast minimums.
#[derive(Parser, Debug)]
#[command(name = "n-contrast", version, after_long_help = REQUIREMENTS)]
struct Args {
    /// Foreground color as six hex digits, e.g. "#3b82f6"
    foreground: Option<String>,

    /// Background color as six hex digits, e.g. "#ffffff"
    background: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Enable debug logging on stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let (Some(foreground), Some(background)) = (args.foreground, args.background) else {
        tracing::debug!("fewer than two colors given, printing usage");
        Args::command()
            .print_long_help()
            .context("failed to print usage")?;
        return Ok(());
    };

    let result = n_wcag::check_contrast(&foreground, &background)?;
    let rendered = Report::new(&foreground, &background, result)
        .render(args.format)
        .context("failed to render report")?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{rendered}").context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
