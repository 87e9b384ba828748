use bmpmill::{HeaderVariant, Unstoppable};

/// Build a 24-bit BMP. `info_len` selects the header layout (12, 40, 108
/// or 124); `tail` fills the bytes after the common prefix and must match
/// that layout's trailing length. `pixels` are (blue, green, red) triples,
/// bottom row first, left to right.
fn build_bmp(
    info_len: usize,
    tail: &[u8],
    width: u32,
    height: u32,
    pixels: &[(u8, u8, u8)],
) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let pad = (4 - (width as usize * 3) % 4) % 4;
    let pixel_bytes = (width as usize * 3 + pad) * height as usize;
    let offset = 14 + info_len;
    let file_size = (offset + pixel_bytes) as u32;

    let mut out = Vec::with_capacity(offset + pixel_bytes);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(offset as u32).to_le_bytes());

    out.extend_from_slice(&(info_len as u32).to_le_bytes());
    if info_len == 12 {
        out.extend_from_slice(&(width as u16).to_le_bytes());
        out.extend_from_slice(&(height as u16).to_le_bytes());
    } else {
        out.extend_from_slice(&(width as i32).to_le_bytes());
        out.extend_from_slice(&(height as i32).to_le_bytes());
    }
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(tail);
    assert_eq!(out.len(), offset);

    for row in pixels.chunks(width.max(1) as usize) {
        for &(b, g, r) in row {
            out.extend_from_slice(&[b, g, r]);
        }
        out.extend(std::iter::repeat_n(0u8, pad));
    }
    out
}

#[test]
fn info40_roundtrip_is_byte_identical() {
    // 3x2: rows are 9 pixel bytes + 3 padding bytes.
    let pixels = [
        (1, 2, 3),
        (4, 5, 6),
        (7, 8, 9),
        (10, 20, 30),
        (40, 50, 60),
        (70, 80, 90),
    ];
    let data = build_bmp(40, &[0u8; 24], 3, 2, &pixels);

    let image = bmpmill::decode(&data, Unstoppable).unwrap();
    assert_eq!(image.info_header().variant(), HeaderVariant::Info);
    let geometry = image.geometry();
    assert_eq!((geometry.width, geometry.height), (3, 2));
    assert_eq!(geometry.bits_per_pixel, 24);
    assert_eq!(image.pixels().get(0, 0), bmpmill::Pixel::new(1, 2, 3));
    assert_eq!(image.pixels().get(2, 1), bmpmill::Pixel::new(70, 80, 90));

    let encoded = image.encode(Unstoppable).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn core12_roundtrip_is_byte_identical() {
    let pixels = [(9, 8, 7), (6, 5, 4)];
    let data = build_bmp(12, &[], 2, 1, &pixels);

    let image = bmpmill::decode(&data, Unstoppable).unwrap();
    assert_eq!(image.info_header().variant(), HeaderVariant::Core);
    assert_eq!(image.file_header().pixel_offset, 26);
    assert_eq!((image.geometry().width, image.geometry().height), (2, 1));

    let encoded = image.encode(Unstoppable).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn v4_tail_is_preserved_verbatim() {
    // Fill the 92 trailing bytes (masks, color space, endpoints, gamma)
    // with a pattern the codec must not interpret or normalize.
    let tail: Vec<u8> = (0..92u8).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect();
    let data = build_bmp(108, &tail, 1, 1, &[(255, 0, 128)]);

    let image = bmpmill::decode(&data, Unstoppable).unwrap();
    assert_eq!(image.info_header().variant(), HeaderVariant::V4);

    let encoded = image.encode(Unstoppable).unwrap();
    assert_eq!(encoded, data);
    assert_eq!(&encoded[30..122], &tail[..]);
}

#[test]
fn v5_roundtrip_is_byte_identical() {
    let tail: Vec<u8> = (0..108u8).map(|i| i.wrapping_mul(29).wrapping_add(3)).collect();
    let data = build_bmp(124, &tail, 2, 2, &[(0, 0, 0), (1, 1, 1), (2, 2, 2), (3, 3, 3)]);

    let image = bmpmill::decode(&data, Unstoppable).unwrap();
    assert_eq!(image.info_header().variant(), HeaderVariant::V5);
    assert_eq!(image.file_header().pixel_offset, 138);

    let encoded = image.encode(Unstoppable).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn file_header_fields_pass_through_unmodified() {
    let mut data = build_bmp(40, &[0u8; 24], 1, 1, &[(5, 6, 7)]);
    // A lying file size and nonzero reserved fields must survive untouched.
    data[2..6].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
    data[6..8].copy_from_slice(&7u16.to_le_bytes());
    data[8..10].copy_from_slice(&9u16.to_le_bytes());

    let image = bmpmill::decode(&data, Unstoppable).unwrap();
    assert_eq!(image.file_header().file_size, 0xDEAD_BEEF);
    assert_eq!(image.file_header().reserved1, 7);
    assert_eq!(image.file_header().reserved2, 9);

    let encoded = image.encode(Unstoppable).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn bytes_past_the_pixel_array_are_dropped() {
    let mut data = build_bmp(40, &[0u8; 24], 1, 1, &[(5, 6, 7)]);
    let clean_len = data.len();
    data.extend_from_slice(b"trailing icc profile junk");

    let image = bmpmill::decode(&data, Unstoppable).unwrap();
    let encoded = image.encode(Unstoppable).unwrap();
    assert_eq!(encoded, data[..clean_len]);
}

#[test]
fn zero_height_roundtrip() {
    let data = build_bmp(40, &[0u8; 24], 2, 0, &[]);
    let image = bmpmill::decode(&data, Unstoppable).unwrap();
    assert!(image.pixels().is_empty());
    assert_eq!(image.encode(Unstoppable).unwrap(), data);
}
