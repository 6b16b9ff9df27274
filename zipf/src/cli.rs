// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

use crate::config::load_config;
use crate::core::analyzer::analyze_file;
use crate::utils::prompt_for_path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyze (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Config file to use instead of the nearest .zipf.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Words per line in the word-frequency report
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Column width of the word-frequency report
    #[arg(short = 'w', long)]
    pub column_width: Option<usize>,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[must_use]
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Installs the stderr log subscriber. Safe to call more than once.
pub fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// # Errors
///
/// This function may return an error if:
/// * No input file is given and none can be read from the prompt
/// * The config file cannot be loaded
/// * The input cannot be read or a report cannot be written
pub fn run(args: Args) -> Result<()> {
    run_with_console(args, &mut io::stdin().lock(), &mut io::stdout())
}

/// Runs one analysis, reading a prompted file name from `console_in` and
/// writing the prompt, report paths and timing to `console_out`.
///
/// # Errors
///
/// Same as [`run`], plus failures writing to `console_out`.
pub fn run_with_console<R: BufRead, W: Write>(
    args: Args,
    console_in: &mut R,
    console_out: &mut W,
) -> Result<()> {
    let start = Instant::now();

    let input = match args.input {
        Some(input) => input,
        None => prompt_for_path(console_in, console_out)?,
    };

    let input_dir = input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = load_config(args.config.as_deref(), input_dir)?
        .with_overrides(args.batch_size, args.column_width);
    config.validate()?;

    let analysis = analyze_file(&input, &args.output_dir, &config)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;

    writeln!(
        console_out,
        "Wrote {} and {}",
        analysis.word_report.display(),
        analysis.rank_report.display()
    )?;
    writeln!(
        console_out,
        "Elapsed time = {:.3} msec",
        start.elapsed().as_secs_f64() * 1000.0
    )?;
    Ok(())
}
