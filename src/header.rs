//! BMP file and information header codec.
//!
//! The file header's pixel-data offset is the sole discriminator for which
//! of the four information-header layouts follows. Variant-specific
//! trailing fields (compression, color masks, color-space data) are never
//! interpreted — they are carried as opaque bytes and re-serialized
//! verbatim, so derived files keep them bit-exact.

use crate::cursor::Cursor;
use crate::error::BmpError;

/// Size of the fixed file header, bytes.
pub const FILE_HEADER_LEN: usize = 14;

const BMP_MAGIC: [u8; 2] = *b"BM";

// ── Header variants ─────────────────────────────────────────────────

/// The four mutually exclusive information-header layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderVariant {
    /// BITMAPCOREHEADER, 12 bytes (pixel data at offset 26).
    Core,
    /// BITMAPINFOHEADER, 40 bytes (offset 54).
    Info,
    /// BITMAPV4HEADER, 108 bytes (offset 122).
    V4,
    /// BITMAPV5HEADER, 124 bytes (offset 138).
    V5,
}

impl HeaderVariant {
    /// Select the layout implied by the file header's pixel-data offset.
    /// Returns `None` for any offset outside the four known constants.
    pub fn from_pixel_offset(offset: u32) -> Option<Self> {
        match offset {
            26 => Some(Self::Core),
            54 => Some(Self::Info),
            122 => Some(Self::V4),
            138 => Some(Self::V5),
            _ => None,
        }
    }

    /// Serialized size of this layout, bytes.
    pub fn byte_len(self) -> usize {
        match self {
            Self::Core => 12,
            Self::Info => 40,
            Self::V4 => 108,
            Self::V5 => 124,
        }
    }

    /// Pixel-data offset implied by this layout (file header + info header).
    pub fn pixel_offset(self) -> u32 {
        (FILE_HEADER_LEN + self.byte_len()) as u32
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The fixed 14-byte record at the start of every BMP file.
///
/// All fields round-trip verbatim: nothing is recomputed when a transformed
/// copy is written, so a source file's size and offset fields reappear
/// unchanged in every derived output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Total file size as declared by the writer (not validated).
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel array from the start of the file.
    pub pixel_offset: u32,
}

impl FileHeader {
    /// Parse exactly [`FILE_HEADER_LEN`] bytes.
    pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<Self, BmpError> {
        if cursor.read_fixed_bytes::<2>()? != BMP_MAGIC {
            return Err(BmpError::UnrecognizedFormat);
        }
        Ok(Self {
            file_size: cursor.get_u32_le()?,
            reserved1: cursor.get_u16_le()?,
            reserved2: cursor.get_u16_le()?,
            pixel_offset: cursor.get_u32_le()?,
        })
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&BMP_MAGIC);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.pixel_offset.to_le_bytes());
    }

    /// Which information-header layout follows this file header.
    pub fn variant(&self) -> Result<HeaderVariant, BmpError> {
        HeaderVariant::from_pixel_offset(self.pixel_offset)
            .ok_or(BmpError::UnsupportedHeaderVariant(self.pixel_offset))
    }
}

// ── Information header ──────────────────────────────────────────────

/// One of the four information-header layouts, parsed far enough to expose
/// geometry. Everything after the common prefix lives in `tail` untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    variant: HeaderVariant,
    header_size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bits_per_pixel: u16,
    tail: Vec<u8>,
}

impl InfoHeader {
    /// Parse the layout selected by `variant`, consuming exactly
    /// [`HeaderVariant::byte_len`] bytes.
    ///
    /// The `header_size` field is carried but not checked against the
    /// variant — the file header's offset is the sole discriminator.
    pub(crate) fn parse(
        cursor: &mut Cursor<'_>,
        variant: HeaderVariant,
    ) -> Result<Self, BmpError> {
        let start = cursor.position();
        let header_size = cursor.get_u32_le()?;
        let (width, height) = match variant {
            // The 12-byte core layout stores its dimensions as u16.
            HeaderVariant::Core => (
                i32::from(cursor.get_u16_le()?),
                i32::from(cursor.get_u16_le()?),
            ),
            _ => (cursor.get_i32_le()?, cursor.get_i32_le()?),
        };
        let planes = cursor.get_u16_le()?;
        let bits_per_pixel = cursor.get_u16_le()?;
        let prefix_len = cursor.position() - start;
        let tail = cursor.read_vec(variant.byte_len() - prefix_len)?;
        Ok(Self {
            variant,
            header_size,
            width,
            height,
            planes,
            bits_per_pixel,
            tail,
        })
    }

    /// Byte-exact inverse of [`InfoHeader::parse`]: same field order and
    /// widths, no implicit padding between fields.
    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        match self.variant {
            // Width/height came in as u16, so they fit going back out.
            HeaderVariant::Core => {
                out.extend_from_slice(&(self.width as u16).to_le_bytes());
                out.extend_from_slice(&(self.height as u16).to_le_bytes());
            }
            _ => {
                out.extend_from_slice(&self.width.to_le_bytes());
                out.extend_from_slice(&self.height.to_le_bytes());
            }
        }
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.tail);
    }

    pub fn variant(&self) -> HeaderVariant {
        self.variant
    }

    /// Raw signed width as stored in the header.
    pub fn raw_width(&self) -> i32 {
        self.width
    }

    /// Raw signed height as stored in the header. A negative value means
    /// top-down row order, which this crate rejects at [`Self::geometry`].
    pub fn raw_height(&self) -> i32 {
        self.height
    }

    /// Normalized geometry — the only header data the rest of the pipeline
    /// needs.
    pub fn geometry(&self) -> Result<Geometry, BmpError> {
        let width = u32::try_from(self.width)
            .map_err(|_| BmpError::InvalidGeometry(format!("negative width {}", self.width)))?;
        let height = u32::try_from(self.height).map_err(|_| {
            BmpError::InvalidGeometry(format!(
                "negative height {} (top-down row order unsupported)",
                self.height
            ))
        })?;
        Ok(Geometry {
            width,
            height,
            bits_per_pixel: self.bits_per_pixel,
        })
    }
}

// ── Geometry ────────────────────────────────────────────────────────

/// Normalized image geometry, independent of which header layout carried it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
}
