/// Implementation of `frx extract`.
///
/// Scans an `.frx` file and writes each record's payload to its own file
/// in the output directory:
///
/// ```text
/// record_000.png     ← Image, extension from the sniffed label
/// record_001.txt     ← ListItem (NUL-separated item text, raw bytes)
/// record_002.unknown ← Image whose format could not be sniffed
/// ```
///
/// Payloads are written verbatim — never re-encoded, never validated.
/// An aborted scan still writes every record recovered before the
/// failure point, then fails with the scan error so callers notice.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use frx_decoder::{FrxScanner, ScanOutcome};
use frx_types::{ResourceKind, ResourceRecord};

use crate::ExtractArgs;

/// Run the `frx extract` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the output directory
/// cannot be created, a payload cannot be written, or the scan aborts
/// (after writing the recovered records).
pub fn run(args: &ExtractArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let report = FrxScanner::scan(&bytes);

    fs::create_dir_all(&args.out)
        .with_context(|| format!("cannot create output directory {}", args.out.display()))?;

    let mut written = 0usize;
    for (idx, record) in report.records.iter().enumerate() {
        if args.images_only && record.kind != ResourceKind::Image {
            continue;
        }

        let path = output_path(&args.out, idx, record);
        fs::write(&path, &record.payload)
            .with_context(|| format!("cannot write {}", path.display()))?;
        println!("{} ({} bytes)", path.display(), record.len());
        written += 1;
    }

    match report.outcome {
        ScanOutcome::Complete => {
            println!(
                "extracted {written} record{}",
                if written == 1 { "" } else { "s" }
            );
            Ok(())
        }
        ScanOutcome::Aborted(err) => Err(anyhow!(
            "scan aborted after recovering {written} record{}: {err}",
            if written == 1 { "" } else { "s" }
        )),
    }
}

/// `record_NNN.<ext>` — images take the sniffed label as extension (the
/// origin tool names saved images the same way), list records `.txt`.
fn output_path(dir: &std::path::Path, idx: usize, record: &ResourceRecord) -> PathBuf {
    let ext = match record.kind {
        ResourceKind::Image => record.label.as_str(),
        ResourceKind::ListItem => "txt",
    };
    dir.join(format!("record_{idx:03}.{ext}"))
}
