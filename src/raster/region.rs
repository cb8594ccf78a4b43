//! Pixel-region writer
//!
//! Merges a packed, row-major, MSB-first source rectangle into the raster at an
//! arbitrary pixel origin. The origin rarely lands on a byte boundary, so each
//! destination byte is assembled from the tail of one source byte and the head
//! of the next, then masked so that only pixels inside the rectangle change.

use crate::raster::error::RegionError;
use crate::raster::framebuffer::Framebuffer;

/// Rectangle in raster pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge
    pub x: usize,
    /// Top edge
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Region {
    /// Describe a rectangle
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Source bytes per row
    pub const fn stride(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// Source bytes the whole rectangle needs
    pub const fn source_len(&self) -> usize {
        self.stride() * self.height
    }

    /// True when the rectangle covers no pixel
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// First and last raster byte column touched on each row
    ///
    /// `None` for an empty rectangle.
    pub const fn byte_span(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }
        match self.x.checked_add(self.width - 1) {
            Some(last) => Some((self.x / 8, last / 8)),
            None => None,
        }
    }

    /// Rows touched, top to bottom
    pub fn rows(&self) -> core::ops::Range<usize> {
        self.y..self.y.saturating_add(self.height)
    }

    fn fits(&self, width: usize, height: usize) -> bool {
        match (self.x.checked_add(self.width), self.y.checked_add(self.height)) {
            (Some(right), Some(bottom)) => right <= width && bottom <= height,
            _ => false,
        }
    }
}

impl<const N: usize> Framebuffer<N> {
    /// Merge `source` into the rectangle at (`x`, `y`)
    ///
    /// `source` holds `height` rows of `ceil(width / 8)` bytes. Bounds and
    /// source length are checked first; on error nothing is written. Pixels
    /// outside the rectangle keep their value, including those sharing a byte
    /// with its left or right edge.
    pub fn write_region(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        source: &[u8],
    ) -> Result<Region, RegionError> {
        let region = Region::new(x, y, width, height);
        self.check(&region, source)?;

        let Some((byte_start, byte_end)) = region.byte_span() else {
            return Ok(region);
        };
        let stride = region.stride();
        let bit_offset = x % 8;

        for (i, src) in source.chunks_exact(stride).take(height).enumerate() {
            let Some(dst) = self.row_mut(y + i) else {
                break;
            };
            for j in byte_start..=byte_end {
                let k = j - byte_start;
                let incoming = carried_bits(src, k, bit_offset) | shifted_bits(src, k, bit_offset);
                let mask = edge_mask(&region, j);
                dst[j] = (dst[j] & !mask) | (incoming & mask);
            }
        }
        Ok(region)
    }

    /// Validate a rectangle and its source against this raster
    pub fn check(&self, region: &Region, source: &[u8]) -> Result<(), RegionError> {
        self.check_bounds(region)?;
        let expected = region.source_len();
        if source.len() < expected {
            return Err(RegionError::SourceTooShort {
                expected,
                actual: source.len(),
            });
        }
        Ok(())
    }

    /// Validate only the placement of a rectangle
    pub fn check_bounds(&self, region: &Region) -> Result<(), RegionError> {
        if region.fits(self.width(), self.height()) {
            return Ok(());
        }
        Err(RegionError::OutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
        })
    }
}

/// Low `8 - offset` bits of the previous source byte, moved to the top
fn carried_bits(src: &[u8], k: usize, offset: usize) -> u8 {
    if k == 0 || offset == 0 {
        return 0;
    }
    src.get(k - 1).map_or(0, |&b| b << (8 - offset))
}

/// High `8 - offset` bits of the current source byte, moved down
///
/// Past the end of the source row the trailing destination bits come from the
/// mask instead, so reading stops there.
fn shifted_bits(src: &[u8], k: usize, offset: usize) -> u8 {
    src.get(k).map_or(0, |&b| b >> offset)
}

/// Bits of raster byte `j` that fall inside the rectangle
fn edge_mask(region: &Region, j: usize) -> u8 {
    let first = region.x.max(j * 8) - j * 8;
    let last = (region.x + region.width).min(j * 8 + 8) - j * 8;
    ((0xFFu16 >> first) & !(0xFFu16 >> last)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::framebuffer::buffer_len;
    use std::vec::Vec;

    const W: usize = 48;
    const H: usize = 4;
    type Raster = Framebuffer<{ buffer_len(W, H) }>;

    fn patterned() -> Raster {
        let mut raster = Raster::new(W, H).unwrap();
        for y in 0..H {
            for x in 0..W {
                raster.set_pixel(x, y, (x * 7 + y * 3) % 5 < 2);
            }
        }
        raster
    }

    fn source_bit(source: &[u8], stride: usize, col: usize, row: usize) -> bool {
        source[row * stride + col / 8] & (0x80 >> (col % 8)) != 0
    }

    fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect()
    }

    #[test]
    fn every_offset_and_width_matches_pixel_reference() {
        for x in 0..16 {
            for width in 1..=24 {
                for height in [1, 3] {
                    let region = Region::new(x, 1, width, height);
                    let source = noise(region.source_len(), (x * 100 + width) as u32);
                    let before = patterned();
                    let mut raster = before.clone();

                    raster.write_region(x, 1, width, height, &source).unwrap();

                    for py in 0..H {
                        for px in 0..W {
                            let inside = px >= x
                                && px < x + width
                                && py >= 1
                                && py < 1 + height;
                            let expected = if inside {
                                source_bit(&source, region.stride(), px - x, py - 1)
                            } else {
                                before.get_pixel(px, py).unwrap()
                            };
                            assert_eq!(
                                raster.get_pixel(px, py),
                                Some(expected),
                                "x={x} width={width} height={height} pixel=({px}, {py})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn aligned_write_is_a_byte_copy() {
        let mut raster = patterned();
        let source = noise(2 * 3, 9);
        raster.write_region(16, 1, 16, 3, &source).unwrap();

        for row in 0..3 {
            let bytes = raster.row(1 + row).unwrap();
            assert_eq!(&bytes[2..4], &source[row * 2..row * 2 + 2]);
        }
        assert_eq!(raster.row(0), patterned().row(0));
    }

    #[test]
    fn out_of_bounds_is_rejected_without_writing() {
        let mut raster = patterned();
        let source = [0xFF; 64];

        let err = raster.write_region(41, 0, 8, 1, &source).unwrap_err();
        assert_eq!(
            err,
            RegionError::OutOfBounds {
                x: 41,
                y: 0,
                width: 8,
                height: 1
            }
        );
        assert!(raster.write_region(0, 2, 8, 3, &source).is_err());
        assert!(raster.write_region(usize::MAX, 0, 2, 1, &source).is_err());
        assert_eq!(raster, patterned());
    }

    #[test]
    fn short_source_is_rejected_without_writing() {
        let mut raster = patterned();
        let err = raster.write_region(3, 0, 10, 2, &[0xFF; 3]).unwrap_err();
        assert_eq!(
            err,
            RegionError::SourceTooShort {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(raster, patterned());
    }

    #[test]
    fn empty_region_is_a_no_op() {
        let mut raster = patterned();
        let region = raster.write_region(5, 2, 0, 2, &[]).unwrap();
        assert_eq!(region.byte_span(), None);
        raster.write_region(5, 2, 3, 0, &[]).unwrap();
        assert_eq!(raster, patterned());
    }

    #[test]
    fn writing_twice_is_idempotent() {
        let source = noise(3 * 4, 4);
        let mut once = patterned();
        once.write_region(5, 0, 19, 4, &source).unwrap();
        let mut twice = once.clone();
        twice.write_region(5, 0, 19, 4, &source).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn glyph_at_x3_on_64x32() {
        let mut raster = Framebuffer::<{ buffer_len(64, 32) }>::new(64, 32).unwrap();
        for (i, byte) in noise(raster.as_bytes().len(), 1).into_iter().enumerate() {
            let (y, col) = (i / 8, i % 8);
            for bit in 0..8 {
                raster.set_pixel(col * 8 + bit, y, byte & (0x80 >> bit) != 0);
            }
        }
        let before = raster.clone();
        let glyph = noise(16, 2);

        let region = raster.write_region(3, 0, 8, 16, &glyph).unwrap();
        assert_eq!(region.byte_span(), Some((0, 1)));

        for row in 0..16 {
            let old = before.row(row).unwrap();
            let new = raster.row(row).unwrap();
            assert_eq!(new[0] & 0xE0, old[0] & 0xE0);
            assert_eq!(new[0] & 0x1F, glyph[row] >> 3);
            assert_eq!(new[1] & 0xE0, glyph[row] << 5);
            assert_eq!(new[1] & 0x1F, old[1] & 0x1F);
            assert_eq!(&new[2..], &old[2..]);
        }
        for row in 16..32 {
            assert_eq!(raster.row(row), before.row(row));
        }
    }

    #[test]
    fn edge_mask_covers_partial_bytes() {
        let region = Region::new(3, 0, 10, 1);
        assert_eq!(edge_mask(&region, 0), 0b0001_1111);
        assert_eq!(edge_mask(&region, 1), 0b1111_1000);
        let region = Region::new(8, 0, 8, 1);
        assert_eq!(edge_mask(&region, 1), 0xFF);
    }

    #[test]
    fn writes_flush_with_the_right_edge() {
        for width in 1..=24 {
            let x = W - width;
            let region = Region::new(x, 2, width, 2);
            let source = noise(region.source_len(), width as u32);
            let before = patterned();
            let mut raster = before.clone();

            raster.write_region(x, 2, width, 2, &source).unwrap();

            for py in 0..H {
                for px in 0..W {
                    let expected = if px >= x && (2..4).contains(&py) {
                        source_bit(&source, region.stride(), px - x, py - 2)
                    } else {
                        before.get_pixel(px, py).unwrap()
                    };
                    assert_eq!(raster.get_pixel(px, py), Some(expected), "x={x} width={width}");
                }
            }
        }
    }

    #[test]
    fn padding_bits_of_a_narrow_raster_stay_clear() {
        let mut raster = Framebuffer::<{ buffer_len(13, 2) }>::new(13, 2).unwrap();
        raster.write_region(5, 0, 8, 2, &[0xFF, 0xFF]).unwrap();

        for y in 0..2 {
            // pixels 5..13 set, the three padding bits of byte 1 untouched
            assert_eq!(raster.row(y), Some(&[0b0000_0111, 0b1111_1000][..]));
        }
        assert!(raster.write_region(6, 0, 8, 1, &[0xFF]).is_err());
    }

    #[test]
    fn byte_span_of_an_unvalidated_region_does_not_overflow() {
        assert_eq!(Region::new(usize::MAX, 0, 2, 1).byte_span(), None);
        assert_eq!(Region::new(usize::MAX, 0, 1, 1).byte_span(), Some((usize::MAX / 8, usize::MAX / 8)));
        assert_eq!(Region::new(0, usize::MAX, 1, 2).rows(), usize::MAX..usize::MAX);
    }

    #[test]
    fn check_bounds_ignores_the_source() {
        let raster = patterned();
        assert!(raster.check_bounds(&Region::new(40, 0, 8, 4)).is_ok());
        assert!(raster.check_bounds(&Region::new(usize::MAX, 0, 8, 1)).is_err());
        assert!(raster.check(&Region::new(40, 0, 8, 4), &[]).is_err());
    }
}
