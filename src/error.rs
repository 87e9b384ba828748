use enough::StopReason;

/// Errors from BMP decoding, encoding, and transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    /// The file header's pixel-data offset matches none of the four known
    /// information-header layouts (26, 54, 122, 138).
    #[error("unsupported header variant: pixel data offset {0}")]
    UnsupportedHeaderVariant(u32),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("dimension mismatch: copy of {src_width}x{src_height} into {dst_width}x{dst_height}")]
    DimensionMismatch {
        dst_width: usize,
        dst_height: usize,
        src_width: usize,
        src_height: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
