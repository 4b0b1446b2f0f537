/// Implementation of `frx inspect`.
///
/// Scans an `.frx` file and prints a structured summary of every record
/// to stdout. Optionally shows payload text (`--show-body`), a raw hex
/// dump (`--show-hex`), or machine-readable JSON (`--json`). When
/// `--record N` is given, only the record at index N is shown.
///
/// # Output format
///
/// ```text
/// Container: 4 records, 18432 bytes
/// Record 0: Image [png] (12040 bytes)
/// Record 1: ListItem (37 bytes)
/// Record 2: ListItem (12 bytes)
/// Record 3: Image [bmp] (6230 bytes)
/// ---
/// Outcome: complete
/// ```
///
/// An aborted scan prints the recovered records followed by
/// `Outcome: aborted — <reason>` and exits with code 1.
use std::fs;

use anyhow::{Context, Result, anyhow};
use frx_decoder::{FrxScanner, ScanOutcome, ScanReport};
use frx_types::{ResourceKind, ResourceRecord};
use serde::Serialize;

use crate::InspectArgs;

/// JSON shape for one record in `--json` mode.
#[derive(Serialize)]
struct RecordSummary<'a> {
    index: usize,
    kind: &'static str,
    label: &'a str,
    bytes: usize,
}

/// JSON shape for the whole report in `--json` mode.
#[derive(Serialize)]
struct ReportSummary<'a> {
    records: Vec<RecordSummary<'a>>,
    complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the `frx inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the scan aborts (the
/// recovered records are still printed first).
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let report = FrxScanner::scan(&bytes);

    if args.json {
        print_json(&report)?;
    } else {
        print_text(args, &report, bytes.len());
    }

    match &report.outcome {
        ScanOutcome::Complete => Ok(()),
        ScanOutcome::Aborted(err) => Err(anyhow!("scan aborted: {err}")),
    }
}

fn print_json(report: &ScanReport) -> Result<()> {
    let summary = ReportSummary {
        records: report
            .records
            .iter()
            .enumerate()
            .map(|(index, r)| RecordSummary {
                index,
                kind: r.kind.as_str(),
                label: &r.label,
                bytes: r.len(),
            })
            .collect(),
        complete: report.is_complete(),
        error: match &report.outcome {
            ScanOutcome::Complete => None,
            ScanOutcome::Aborted(err) => Some(err.to_string()),
        },
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_text(args: &InspectArgs, report: &ScanReport, container_bytes: usize) {
    println!(
        "Container: {} record{}, {container_bytes} bytes",
        report.records.len(),
        if report.records.len() == 1 { "" } else { "s" }
    );

    for (idx, record) in report.records.iter().enumerate() {
        // When --record N is specified, skip all other indices.
        if let Some(target) = args.record
            && idx != target
        {
            continue;
        }

        println!("Record {idx}: {}{} ({} bytes)", record.kind, record_detail(record), record.len());

        if args.show_body && record.kind == ResourceKind::ListItem {
            // List payloads are NUL-separated item strings; render each
            // item on its own line, the way the origin tool previews them.
            let text = String::from_utf8_lossy(&record.payload).replace('\0', "\n          ");
            println!("          {text}");
        }

        if args.show_hex {
            print_hex(&record.payload);
        }
    }

    println!("---");
    match &report.outcome {
        ScanOutcome::Complete => println!("Outcome: complete"),
        ScanOutcome::Aborted(err) => println!("Outcome: aborted — {err}"),
    }
}

/// Inline detail after the kind label: the sniffed format for images,
/// nothing for list records (their label is the fixed tag already shown
/// as the kind).
fn record_detail(record: &ResourceRecord) -> String {
    match record.kind {
        ResourceKind::Image => format!(" [{}]", record.label),
        ResourceKind::ListItem => String::new(),
    }
}

/// 16-bytes-per-line hex dump with an ASCII gutter.
fn print_hex(payload: &[u8]) {
    for (i, chunk) in payload.chunks(16).enumerate() {
        let offset = i * 16;
        let hex: String = chunk
            .iter()
            .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                use std::fmt::Write as _;
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("          {offset:04x}  {hex:<47}  {ascii}");
    }
}
