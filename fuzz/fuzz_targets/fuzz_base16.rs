#![no_main]

use libfuzzer_sys::fuzz_target;
use trace_codec::bigendian;

fuzz_target!(|data: &[u8]| {
    // Fuzz base16 decoding at a handful of offsets; must never panic
    if let Ok(text) = std::str::from_utf8(data) {
        for offset in [0usize, 1, 8, 16, 1024] {
            let _ = bigendian::decode_from_base16(text, offset);
        }

        // Valid decodes must re-encode to the same window
        if let Ok(value) = bigendian::decode_from_base16(text, 0) {
            let mut round = String::new();
            bigendian::encode_to_base16(value, &mut round);
            let window: String = text.chars().take(bigendian::LONG_BASE16).collect();
            assert_eq!(round, window);
        }
    }

    // Byte decoding is bounds-checked, never panics
    let _ = bigendian::decode_from_bytes(data, 0);
    let _ = bigendian::decode_from_bytes(data, data.len());
});
