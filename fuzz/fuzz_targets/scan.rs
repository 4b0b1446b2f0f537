#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full scanner entry point on arbitrary input bytes.
//
// The scanner must never panic: every fatal condition (truncated key
// read, size field past the buffer end, unknown list key) has to come
// back as a ScanOutcome::Aborted value. Catches bugs in:
// - the classification read at offset + 4
// - image size arithmetic (untrusted u32 + offset)
// - marker search bounds and shift arithmetic
// - loop forward progress (a hang here is a consumed == 0 bug)
fuzz_target!(|data: &[u8]| {
    let report = frx_decoder::FrxScanner::scan(data);
    let _ = report.is_complete();
});
