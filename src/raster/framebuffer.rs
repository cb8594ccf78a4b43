//! Fixed-capacity packed framebuffer

use crate::raster::error::RegionError;

/// Bytes needed for a `width` x `height` raster
///
/// Usable in const position, e.g. `Framebuffer<{ buffer_len(64, 32) }>`.
pub const fn buffer_len(width: usize, height: usize) -> usize {
    width.div_ceil(8) * height
}

/// Monochrome raster, one bit per pixel
///
/// `N` is the exact byte capacity, see [`buffer_len`]. The raster is owned by a
/// single panel driver and only mutated through `&mut self`.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<const N: usize> {
    width: usize,
    height: usize,
    buffer: [u8; N],
}

impl<const N: usize> Framebuffer<N> {
    /// Create a zeroed raster of `width` x `height` pixels
    ///
    /// Fails when `N` is not exactly `buffer_len(width, height)`.
    pub fn new(width: usize, height: usize) -> Result<Self, RegionError> {
        let expected = buffer_len(width, height);
        if expected != N {
            return Err(RegionError::BufferSize {
                expected,
                actual: N,
            });
        }
        Ok(Self {
            width,
            height,
            buffer: [0; N],
        })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// Fill every pixel with `value`
    pub fn clear(&mut self, value: bool) {
        let fill = if value { 0xFF } else { 0x00 };
        self.buffer.fill(fill);
    }

    /// Read one pixel, `None` when outside the raster
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<bool> {
        let (index, mask) = self.locate(x, y)?;
        Some(self.buffer[index] & mask != 0)
    }

    /// Write one pixel; coordinates outside the raster are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if let Some((index, mask)) = self.locate(x, y) {
            if on {
                self.buffer[index] |= mask;
            } else {
                self.buffer[index] &= !mask;
            }
        }
    }

    /// Packed bytes of row `y`
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let range = self.row_range(y)?;
        Some(&self.buffer[range])
    }

    /// Whole raster, row after row
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Eight vertically stacked pixels of column `x` starting at row `page * 8`,
    /// least significant bit on top, the layout of byte-page controllers
    ///
    /// Rows past the bottom edge read as off.
    pub fn page_byte(&self, x: usize, page: usize) -> Option<u8> {
        if x >= self.width || page * 8 >= self.height {
            return None;
        }
        let byte = (0..8).fold(0u8, |acc, bit| {
            match self.get_pixel(x, page * 8 + bit) {
                Some(true) => acc | (1 << bit),
                _ => acc,
            }
        });
        Some(byte)
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        let range = self.row_range(y)?;
        Some(&mut self.buffer[range])
    }

    fn row_range(&self, y: usize) -> Option<core::ops::Range<usize>> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride();
        Some(start..start + self.stride())
    }

    /// Byte index and bit mask of a pixel; every pixel access goes through here
    fn locate(&self, x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.stride() + x / 8, 0x80 >> (x % 8)))
    }
}

impl<const N: usize> core::fmt::Debug for Framebuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let raster = Framebuffer::<{ buffer_len(64, 32) }>::new(64, 32).unwrap();
        assert_eq!(raster.as_bytes().len(), 8 * 32);
        assert!(raster.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(raster.stride(), 8);
    }

    #[test]
    fn odd_width_rounds_rows_up() {
        let raster = Framebuffer::<{ buffer_len(13, 3) }>::new(13, 3).unwrap();
        assert_eq!(raster.stride(), 2);
        assert_eq!(raster.as_bytes().len(), 6);
    }

    #[test]
    fn mismatched_capacity_is_rejected() {
        let err = Framebuffer::<16>::new(64, 32).unwrap_err();
        assert_eq!(
            err,
            RegionError::BufferSize {
                expected: 256,
                actual: 16
            }
        );
    }

    #[test]
    fn clear_fills_every_byte() {
        let mut raster = Framebuffer::<{ buffer_len(20, 4) }>::new(20, 4).unwrap();
        raster.clear(true);
        assert!(raster.as_bytes().iter().all(|&b| b == 0xFF));
        raster.clear(false);
        raster.clear(false);
        assert!(raster.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn pixels_are_msb_first() {
        let mut raster = Framebuffer::<{ buffer_len(16, 2) }>::new(16, 2).unwrap();
        raster.set_pixel(0, 0, true);
        raster.set_pixel(9, 1, true);
        assert_eq!(raster.as_bytes(), &[0x80, 0x00, 0x00, 0x40]);
        assert_eq!(raster.get_pixel(9, 1), Some(true));
        assert_eq!(raster.get_pixel(8, 1), Some(false));

        raster.set_pixel(0, 0, false);
        assert_eq!(raster.row(0), Some(&[0x00, 0x00][..]));
    }

    #[test]
    fn out_of_range_access_is_checked() {
        let mut raster = Framebuffer::<{ buffer_len(10, 2) }>::new(10, 2).unwrap();
        assert_eq!(raster.get_pixel(10, 0), None);
        assert_eq!(raster.get_pixel(0, 2), None);
        // padding bits of the last byte are not pixels
        raster.set_pixel(12, 0, true);
        assert!(raster.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(raster.row(2), None);
    }

    #[test]
    fn page_byte_stacks_rows_lsb_on_top() {
        let mut raster = Framebuffer::<{ buffer_len(8, 12) }>::new(8, 12).unwrap();
        raster.set_pixel(3, 0, true);
        raster.set_pixel(3, 7, true);
        raster.set_pixel(3, 9, true);
        assert_eq!(raster.page_byte(3, 0), Some(0b1000_0001));
        // second page is only partially backed by rows
        assert_eq!(raster.page_byte(3, 1), Some(0b0000_0010));
        assert_eq!(raster.page_byte(3, 2), None);
        assert_eq!(raster.page_byte(8, 0), None);
    }
}
