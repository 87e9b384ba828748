//! Padded pixel-array reads and writes.
//!
//! BMP stores rows bottom-to-top, each padded with zero bytes to the next
//! 4-byte boundary. Padding is derived from width and bit depth on every
//! call, never cached.

use enough::Stop;

use crate::cursor::Cursor;
use crate::error::BmpError;
use crate::grid::{Pixel, PixelGrid};
use crate::header::Geometry;

/// Number of padding bytes after each row, always in `0..=3`.
pub fn row_padding(width: u32, bits_per_pixel: u16) -> usize {
    let row_bytes = u64::from(width) * u64::from(bits_per_pixel / 8);
    (row_bytes.next_multiple_of(4) - row_bytes) as usize
}

/// Shared geometry validation for reads and writes. Bit depth must be a
/// whole number of bytes per pixel, and only 24-bit BGR is supported.
fn check_geometry(geometry: &Geometry) -> Result<(), BmpError> {
    let bpp = geometry.bits_per_pixel;
    if bpp == 0 || bpp % 8 != 0 {
        return Err(BmpError::InvalidGeometry(format!(
            "bit depth {bpp} is not a whole number of bytes per pixel"
        )));
    }
    if bpp != 24 {
        return Err(BmpError::InvalidGeometry(format!(
            "bit depth {bpp} unsupported (only uncompressed 24-bit BGR)"
        )));
    }
    Ok(())
}

/// Read `height` bottom-to-top rows of 3-byte pixels into a fresh grid,
/// skipping each row's padding with a forward seek. The returned grid is
/// fully initialized: every cell is written before the grid is exposed.
pub(crate) fn read_pixel_array(
    cursor: &mut Cursor<'_>,
    geometry: &Geometry,
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    check_geometry(geometry)?;
    let mut grid = PixelGrid::allocate(geometry.width, geometry.height)?;
    let padding = row_padding(geometry.width, geometry.bits_per_pixel);

    for y in 0..grid.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..grid.width() {
            grid.set(x, y, Pixel::from_bytes(cursor.read_fixed_bytes()?));
        }
        cursor.skip(padding)?;
    }

    Ok(grid)
}

/// Inverse of [`read_pixel_array`]: each row's pixels followed by freshly
/// zeroed padding bytes, bottom row first.
pub(crate) fn write_pixel_array(
    out: &mut Vec<u8>,
    grid: &PixelGrid,
    bits_per_pixel: u16,
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    let geometry = Geometry {
        width: grid.width() as u32,
        height: grid.height() as u32,
        bits_per_pixel,
    };
    check_geometry(&geometry)?;
    let padding = row_padding(geometry.width, bits_per_pixel);

    for y in 0..grid.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..grid.width() {
            out.extend_from_slice(&grid.get(x, y).to_bytes());
        }
        out.extend(core::iter::repeat_n(0u8, padding));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn padding_rounds_rows_to_four_bytes() {
        for width in 0..=10_000u32 {
            let padding = row_padding(width, 24);
            assert!(padding <= 3);
            assert_eq!((width as usize * 3 + padding) % 4, 0);
        }
    }

    #[test]
    fn padding_known_values() {
        // 3 bytes per pixel: the cycle is 0, 1, 2, 3 over width mod 4.
        assert_eq!(row_padding(0, 24), 0);
        assert_eq!(row_padding(1, 24), 1);
        assert_eq!(row_padding(2, 24), 2);
        assert_eq!(row_padding(3, 24), 3);
        assert_eq!(row_padding(4, 24), 0);
    }

    #[test]
    fn read_skips_padding_between_rows() {
        // 1x2 image: rows are 3 pixel bytes + 1 padding byte.
        let bytes = [10, 20, 30, 0xFF, 40, 50, 60, 0xFF];
        let geometry = Geometry {
            width: 1,
            height: 2,
            bits_per_pixel: 24,
        };
        let mut cursor = Cursor::new(&bytes);
        let grid = read_pixel_array(&mut cursor, &geometry, &Unstoppable).unwrap();
        assert_eq!(grid.get(0, 0), Pixel::new(10, 20, 30));
        assert_eq!(grid.get(0, 1), Pixel::new(40, 50, 60));
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn write_pads_with_zeros() {
        let mut grid = PixelGrid::allocate(1, 1).unwrap();
        grid.set(0, 0, Pixel::new(1, 2, 3));
        let mut out = Vec::new();
        write_pixel_array(&mut out, &grid, 24, &Unstoppable).unwrap();
        assert_eq!(out, [1, 2, 3, 0]);
    }

    #[test]
    fn short_pixel_data_is_eof() {
        let bytes = [10, 20];
        let geometry = Geometry {
            width: 1,
            height: 1,
            bits_per_pixel: 24,
        };
        let mut cursor = Cursor::new(&bytes);
        let result = read_pixel_array(&mut cursor, &geometry, &Unstoppable);
        assert!(matches!(result, Err(BmpError::UnexpectedEof)));
    }

    #[test]
    fn unsupported_bit_depths_rejected() {
        for bpp in [0u16, 1, 8, 16, 32] {
            let geometry = Geometry {
                width: 1,
                height: 1,
                bits_per_pixel: bpp,
            };
            let mut cursor = Cursor::new(&[0u8; 16]);
            let result = read_pixel_array(&mut cursor, &geometry, &Unstoppable);
            assert!(
                matches!(result, Err(BmpError::InvalidGeometry(_))),
                "bpp {bpp} should be rejected"
            );
        }
    }
}
