/// FRX command-line tool — inspect, extract, and validate resources
/// embedded in VB6 `.frx` binary containers.
///
/// # Command overview
///
/// ```text
/// frx <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print a human-readable record summary of an .frx file
///   extract    Write each record's payload to its own file
///   validate   Check that an .frx file scans cleanly end to end
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, aborted scan, etc.)      |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_extract;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The FRX resource extractor command-line tool.
#[derive(Parser)]
#[command(name = "frx", version, about = "VB6 .frx resource extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a human-readable summary of each record in an .frx file.
    Inspect(InspectArgs),
    /// Write each record's payload to its own file.
    Extract(ExtractArgs),
    /// Check that an .frx file scans cleanly end to end.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `frx inspect`.
///
/// Scans the container and prints one line per record (index, kind,
/// sniffed label, payload size) plus the terminal scan outcome.
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                               │
/// ├─────────────┼──────────────────────────────────────────────────────┤
/// │ --json      │ Emit machine-readable JSON instead of text          │
/// │ --show-body │ Render list payloads as text (NUL shown as newline) │
/// │ --show-hex  │ Include 16-byte-per-line hex dump of payloads       │
/// │ --record N  │ Show only the record at index N                     │
/// └─────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the `.frx` file to inspect.
    pub file: PathBuf,

    /// Emit a machine-readable JSON summary instead of text.
    #[arg(long)]
    pub json: bool,

    /// Show list-record payloads as text (NUL separators as newlines).
    #[arg(long)]
    pub show_body: bool,

    /// Show raw hex dump of record payloads (16 bytes per line).
    #[arg(long)]
    pub show_hex: bool,

    /// Inspect only the record at this zero-based index (text output).
    #[arg(long)]
    pub record: Option<usize>,
}

/// Arguments for `frx extract`.
///
/// Scans the container and writes each record's payload to
/// `record_NNN.<ext>` in the output directory — images get the sniffed
/// format as their extension, list records get `.txt`. On an aborted
/// scan the records recovered before the failure are still written and
/// the command then fails with the scan error.
#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the `.frx` file to extract from.
    pub file: PathBuf,

    /// Directory to write payload files into (created if missing).
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Extract image records only, skipping list records.
    #[arg(long)]
    pub images_only: bool,
}

/// Arguments for `frx validate`.
///
/// Scans the container and reports either success checkmarks or the
/// diagnostic that aborted the scan. Exit code 0 iff the scan completes.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the `.frx` file to validate.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Extract(args) => cmd_extract::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
