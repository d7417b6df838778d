//! Command line arguments for orfscan

use clap::{ArgAction, Parser};
use log::Level;

use std::{fmt, path::PathBuf};

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// Path to input FASTA file (.fa, .fasta, or .gz)
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Path to output file
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Number of threads used to scan sequences
    #[arg(short = 't', long, default_value = "1")]
    pub threads: usize,

    /// Gzip-compress the output file
    #[arg(short = 'Z', long, default_value = "false", action = ArgAction::SetTrue)]
    pub compress: bool,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the Args struct as a comma-separated string of key=value pairs.
///
/// # Example
///
/// ```rust,ignore
/// use orfscan::Args;
/// let args = Args::parse();
/// println!("{}", args);
/// ```
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input={}, output={}, threads={}, compress={}, level={}",
            self.input.display(),
            self.output.display(),
            self.threads,
            self.compress,
            self.level,
        )
    }
}
