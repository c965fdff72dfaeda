#![no_main]
use complexflag::{decode_generic, Format};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = decode_generic(data, Format::Json);
    let _ = decode_generic(data, Format::Yaml);
});
