#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must fail cleanly — never panic
    let _ = bmpmill::decode(data, enough::Unstoppable);
});
