#![no_main]
use complexflag::unmarshal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Keep the fuzzer away from the filesystem.
        if s.starts_with('@') {
            return;
        }
        let _ = unmarshal(s);
    }
});
