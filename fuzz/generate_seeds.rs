#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // One seed per information-header layout: (info header length, name)
    for (info_len, name) in [
        (12u32, "core_1x1.bmp"),
        (40, "info_1x1.bmp"),
        (108, "v4_1x1.bmp"),
        (124, "v5_1x1.bmp"),
    ] {
        let offset = 14 + info_len;
        let mut bmp = vec![0u8; offset as usize + 4]; // headers + 3 pixel bytes + 1 padding
        bmp[0] = b'B';
        bmp[1] = b'M';
        bmp[2..6].copy_from_slice(&(offset + 4).to_le_bytes()); // file size
        bmp[10..14].copy_from_slice(&offset.to_le_bytes()); // pixel offset
        bmp[14..18].copy_from_slice(&info_len.to_le_bytes()); // header size
        if info_len == 12 {
            bmp[18..20].copy_from_slice(&1u16.to_le_bytes()); // width
            bmp[20..22].copy_from_slice(&1u16.to_le_bytes()); // height
            bmp[22..24].copy_from_slice(&1u16.to_le_bytes()); // planes
            bmp[24..26].copy_from_slice(&24u16.to_le_bytes()); // bpp
        } else {
            bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
            bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
            bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
            bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
        }
        let px = offset as usize;
        bmp[px] = 0xff; // blue
        bmp[px + 1] = 0x00;
        bmp[px + 2] = 0x00;
        fs::write(format!("{dir}/{name}"), bmp).unwrap();
    }

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bad_offset.bin"), {
        let mut bmp = vec![0u8; 14];
        bmp[0] = b'B';
        bmp[1] = b'M';
        bmp[10..14].copy_from_slice(&999u32.to_le_bytes());
        bmp
    })
    .unwrap();

    println!("Generated seed corpus in {dir}/");
}
