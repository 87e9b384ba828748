//! Decode a BMP once, derive transformed copies of it.

use enough::Stop;

use crate::cursor::Cursor;
use crate::error::BmpError;
use crate::grid::PixelGrid;
use crate::header::{FileHeader, Geometry, InfoHeader};
use crate::limits::Limits;
use crate::rows;
use crate::transform::Transform;

/// A decoded 24-bit BMP: both headers exactly as read, plus the pixel grid.
///
/// Encoding writes the stored headers back byte-identically — file size and
/// pixel offset are passed through from the source, not recomputed, so every
/// derived output carries the source's header bytes.
#[derive(Clone, Debug)]
pub struct BmpImage {
    file_header: FileHeader,
    info_header: InfoHeader,
    geometry: Geometry,
    pixels: PixelGrid,
}

/// Decode a BMP from `data`.
///
/// Dispatches the information-header layout on the file header's pixel-data
/// offset; an offset outside the four known constants fails with
/// [`BmpError::UnsupportedHeaderVariant`] before anything is allocated.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<BmpImage, BmpError> {
    decode_inner(data, None, &stop)
}

/// Decode with resource limits applied between header parse and pixel
/// allocation.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<BmpImage, BmpError> {
    decode_inner(data, Some(limits), &stop)
}

fn decode_inner(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<BmpImage, BmpError> {
    let mut cursor = Cursor::new(data);
    let file_header = FileHeader::parse(&mut cursor)?;
    let variant = file_header.variant()?;
    let info_header = InfoHeader::parse(&mut cursor, variant)?;
    let geometry = info_header.geometry()?;
    if let Some(limits) = limits {
        limits.check_geometry(&geometry)?;
    }
    stop.check()?;
    // The dispatch above pins the info header's size to the pixel offset,
    // so the cursor now sits exactly at the pixel array. Bytes past the
    // array are ignored.
    let pixels = rows::read_pixel_array(&mut cursor, &geometry, stop)?;
    Ok(BmpImage {
        file_header,
        info_header,
        geometry,
        pixels,
    })
}

impl BmpImage {
    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Serialize back to BMP bytes: file header, info header, padded pixel
    /// array. With no transform applied this is byte-identical to the
    /// decoded input (minus any bytes past the pixel array).
    pub fn encode(&self, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        self.encode_grid(&self.pixels, &stop)
    }

    /// Render one derived image: the source pixels are copied into a fresh
    /// grid, transformed in place, and serialized under the source's
    /// headers. The source grid is never mutated, so independent outputs
    /// never observe each other's changes.
    pub fn derive(&self, transform: Transform, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        let mut work = PixelGrid::allocate(self.geometry.width, self.geometry.height)?;
        work.copy_from(&self.pixels)?;
        transform.apply(&mut work, &stop)?;
        self.encode_grid(&work, &stop)
    }

    fn encode_grid(&self, grid: &PixelGrid, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
        let row_len = grid
            .width()
            .saturating_mul(3)
            .saturating_add(rows::row_padding(grid.width() as u32, 24));
        let capacity = crate::header::FILE_HEADER_LEN
            + self.info_header.variant().byte_len()
            + row_len.saturating_mul(grid.height());
        let mut out = Vec::with_capacity(capacity);
        self.file_header.write_to(&mut out);
        self.info_header.write_to(&mut out);
        rows::write_pixel_array(&mut out, grid, self.geometry.bits_per_pixel, stop)?;
        Ok(out)
    }
}

/// The four standard derived outputs in their fixed order. The names are a
/// default mapping, not a constraint — callers pick their own paths by
/// calling [`BmpImage::derive`] directly.
pub fn default_outputs() -> [(&'static str, Transform); 4] {
    [
        ("invert.bmp", Transform::Invert),
        ("grayscaleRed.bmp", Transform::GrayFromRed),
        ("grayscaleGreen.bmp", Transform::GrayFromGreen),
        ("grayscaleBlue.bmp", Transform::GrayFromBlue),
    ]
}
