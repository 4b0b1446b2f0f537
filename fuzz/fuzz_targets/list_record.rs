#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: the variable-length list-record decoder in isolation.
//
// Exercises the header checks and the priority-ordered marker search
// directly, without the outer scan loop's key read filtering inputs
// first. Must never panic or report consumed == 0.
fuzz_target!(|data: &[u8]| {
    use frx_decoder::list_record::{self, ListOutcome};

    match list_record::decode(data, 0) {
        Ok(ListOutcome::Empty { consumed } | ListOutcome::Item { consumed, .. }) => {
            assert!(consumed > 0);
            assert!(consumed <= data.len());
        }
        Err(_) => {}
    }
});
