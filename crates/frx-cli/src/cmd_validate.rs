/// Implementation of `frx validate`.
///
/// Runs a full scan of the `.frx` file and reports either a series of
/// success checkmarks (`✓`) or a diagnostic failure line (`✗`). The
/// command exits with code 0 on a clean scan and code 1 on any error
/// (the main dispatcher converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Scan: 4 records decoded
/// ✓ Cursor: reached end of buffer (18432 bytes)
/// ✓ Records: every payload length consistent with its header
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unknown record type: key 0xEFBEADDE at offset 312 (3 records recovered)
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use frx_decoder::{FrxScanner, ScanOutcome};

use crate::ValidateArgs;

/// Run the `frx validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the scan aborts.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let report = FrxScanner::scan(&bytes);

    match report.outcome {
        ScanOutcome::Complete => {
            println!(
                "✓ Scan: {} record{} decoded",
                report.records.len(),
                if report.records.len() == 1 { "" } else { "s" }
            );
            println!("✓ Cursor: reached end of buffer ({} bytes)", bytes.len());
            println!("✓ Records: every payload length consistent with its header");
            Ok(())
        }
        ScanOutcome::Aborted(err) => {
            println!(
                "✗ Error: {err} ({} record{} recovered)",
                report.records.len(),
                if report.records.len() == 1 { "" } else { "s" }
            );
            Err(anyhow!("validation failed"))
        }
    }
}
