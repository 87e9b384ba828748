//! # bmpmill
//!
//! Decoder, per-pixel transform engine, and encoder for uncompressed
//! 24-bit Windows bitmaps (BMP).
//!
//! A source image is decoded once; each transform then runs over a fresh
//! copy of the pixel grid — one parallel task per column — and the result
//! is re-encoded under the source's own header bytes.
//!
//! ## Supported input
//!
//! All four classic information-header layouts, dispatched on the file
//! header's pixel-data offset:
//!
//! | layout           | size | pixel offset |
//! |------------------|------|--------------|
//! | BITMAPCOREHEADER | 12   | 26           |
//! | BITMAPINFOHEADER | 40   | 54           |
//! | BITMAPV4HEADER   | 108  | 122          |
//! | BITMAPV5HEADER   | 124  | 138          |
//!
//! Variant-specific fields (color masks, color-space data, gamma, ICC
//! metadata) are never interpreted; they round-trip byte-for-byte into
//! every derived output.
//!
//! ## Non-Goals
//!
//! - Compressed BMPs (RLE, embedded JPEG/PNG)
//! - Bit depths other than 24-bit BGR; palette/indexed formats
//! - Top-down (negative height) row order
//!
//! ## Usage
//!
//! ```no_run
//! use bmpmill::{Transform, Unstoppable};
//!
//! let data = std::fs::read("photo.bmp")?;
//! let image = bmpmill::decode(&data, Unstoppable)?;
//! let inverted = image.derive(Transform::Invert, Unstoppable)?;
//! std::fs::write("invert.bmp", inverted)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod convert;
mod cursor;
mod error;
mod grid;
mod header;
mod limits;
mod rows;
mod transform;

// Re-exports
pub use convert::{BmpImage, decode, decode_with_limits, default_outputs};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use grid::{Pixel, PixelGrid};
pub use header::{FILE_HEADER_LEN, FileHeader, Geometry, HeaderVariant, InfoHeader};
pub use limits::Limits;
pub use rows::row_padding;
pub use transform::Transform;
