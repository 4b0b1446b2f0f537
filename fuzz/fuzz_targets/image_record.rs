#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: the image-record decoder plus the codec-backed sniffer.
//
// The size field is fully attacker-controlled; the decoder must reject
// any payload slice extending past the buffer instead of panicking, and
// the sniffer must tolerate arbitrary magic bytes.
fuzz_target!(|data: &[u8]| {
    if let Ok((record, consumed)) =
        frx_decoder::image_record::decode(data, 0, &frx_decoder::CodecSniffer)
    {
        assert_eq!(consumed, record.payload.len() + 12);
        assert!(consumed <= data.len());
    }
});
