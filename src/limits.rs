//! Optional decode resource limits.

use crate::error::BmpError;
use crate::header::Geometry;

/// Caps applied after header parsing, before the pixel grid is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_geometry(&self, geometry: &Geometry) -> Result<(), BmpError> {
        let width = u64::from(geometry.width);
        let height = u64::from(geometry.height);
        if let Some(max) = self.max_width {
            if width > max {
                return Err(BmpError::LimitExceeded(format!(
                    "width {width} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if height > max {
                return Err(BmpError::LimitExceeded(format!(
                    "height {height} exceeds limit {max}"
                )));
            }
        }
        let pixels = width * height;
        if let Some(max) = self.max_pixels {
            if pixels > max {
                return Err(BmpError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_memory_bytes {
            let bytes = pixels.saturating_mul(u64::from(geometry.bits_per_pixel / 8));
            if bytes > max {
                return Err(BmpError::LimitExceeded(format!(
                    "pixel buffer of {bytes} bytes exceeds memory limit {max}"
                )));
            }
        }
        Ok(())
    }
}
