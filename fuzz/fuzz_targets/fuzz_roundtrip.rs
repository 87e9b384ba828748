#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode, and the re-encoded bytes must
    // decode to identical headers and pixels
    let Ok(image) = bmpmill::decode(data, enough::Unstoppable) else {
        return;
    };

    let encoded = image
        .encode(enough::Unstoppable)
        .expect("decoded image failed to re-encode");
    let reread = bmpmill::decode(&encoded, enough::Unstoppable)
        .expect("re-encoded data failed to decode");

    assert_eq!(image.file_header(), reread.file_header(), "file header drift");
    assert_eq!(image.info_header(), reread.info_header(), "info header drift");
    assert_eq!(image.pixels(), reread.pixels(), "roundtrip pixel mismatch");
});
