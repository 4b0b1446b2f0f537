//! Conformance snapshots: synthetic containers scanned and rendered.
//!
//! Each test builds a deterministic container with [`ContainerBuilder`],
//! scans it with a fixed sniffer, and compares [`render_report`]'s text
//! form against an inline insta snapshot. A diff here signals either a
//! deliberate format-model change (accept via `cargo insta review`) or
//! an accidental regression in the scan loop or boundary search.

use frx_decoder::FrxScanner;
use frx_tests::{ContainerBuilder, FixedSniffer, render_report};
use insta::assert_snapshot;

#[test]
fn mixed_container() {
    let buf = ContainerBuilder::new()
        .list(b"one\0two")
        .image(&[0x89, 0x50, 0x4E, 0x47])
        .build();

    let report = FrxScanner::scan_with_sniffer(&buf, &FixedSniffer(Some("png")));
    assert_snapshot!(render_report(&report), @r"
    record 0: ListItem (7 bytes) 6f6e650074776f
    record 1: Image [png] (4 bytes) 89504e47
    outcome: complete
    ");
}

#[test]
fn aborted_container_keeps_partial_records() {
    let buf = ContainerBuilder::new()
        .image(&[0x01, 0x02])
        .raw(&[0x02, 0x00, 0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00])
        .build();

    let report = FrxScanner::scan_with_sniffer(&buf, &FixedSniffer(None));
    assert_snapshot!(render_report(&report), @r"
    record 0: Image [unknown] (2 bytes) 0102
    outcome: aborted (unknown record type: key 0xEFBEADDE at offset 14)
    ");
}

#[test]
fn silent_container_renders_outcome_only() {
    let buf = ContainerBuilder::new()
        .padding()
        .padding()
        .list(b"tail no marker")
        .build();

    let report = FrxScanner::scan_with_sniffer(&buf, &FixedSniffer(None));
    assert_snapshot!(render_report(&report), @"outcome: complete");
}
