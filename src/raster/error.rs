//! Errors raised by raster operations

/// Reasons a raster operation is rejected
///
/// Every check happens before the first byte is touched, so a rejected
/// operation leaves the raster exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// The rectangle does not fit inside the raster
    OutOfBounds {
        /// Left edge in pixels
        x: usize,
        /// Top edge in pixels
        y: usize,
        /// Width in pixels
        width: usize,
        /// Height in pixels
        height: usize,
    },
    /// The source holds fewer bytes than `height * ceil(width / 8)`
    SourceTooShort {
        /// Bytes the region needs
        expected: usize,
        /// Bytes that were supplied
        actual: usize,
    },
    /// The backing array does not match `height * ceil(width / 8)`
    BufferSize {
        /// Bytes the geometry needs
        expected: usize,
        /// Capacity of the backing array
        actual: usize,
    },
    /// An interleaved row mapping was built for a different panel height
    VariantMismatch {
        /// Raster height in rows
        height: usize,
        /// First physical row of the second half in the mapping
        half_height: u16,
    },
}

impl core::fmt::Display for RegionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegionError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "region {width}x{height} at ({x}, {y}) is out of bounds"),
            RegionError::SourceTooShort { expected, actual } => {
                write!(f, "source has {actual} bytes, region needs {expected}")
            }
            RegionError::BufferSize { expected, actual } => {
                write!(f, "raster needs {expected} bytes, buffer holds {actual}")
            }
            RegionError::VariantMismatch {
                height,
                half_height,
            } => write!(
                f,
                "interleave at row {half_height} does not split a {height} row raster"
            ),
        }
    }
}
