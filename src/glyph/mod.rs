//! Glyph rasterizer
//!
//! Expands a font glyph into a packed bitmap ready for
//! [`Framebuffer::write_region`](crate::raster::Framebuffer::write_region),
//! applying a display mode on the way.
//!
//! Modes that depend on what is already shown read it from the raster through
//! a callback. The panel itself cannot be read back, so the raster is the
//! authority on the current pixel value.

mod data;
pub mod font;

use font::{Font, FIRST_CHAR, LAST_CHAR};

/// Largest glyph the rasterizer can hold, 12x24 packed
pub const MAX_GLYPH_BYTES: usize = 48;

/// How glyph bits combine with the pixels already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Glyph bits replace the cell
    #[default]
    Overwrite,
    /// Inverted glyph bits replace the cell
    Invert,
    /// Glyph bits toggle the pixels already shown
    Xor,
}

impl Mode {
    /// New pixel for a glyph bit over the `current` pixel
    pub const fn apply(self, glyph: bool, current: bool) -> bool {
        match self {
            Mode::Overwrite => glyph,
            Mode::Invert => !glyph,
            Mode::Xor => current ^ glyph,
        }
    }
}

/// Clamp to the printable ASCII range, anything else becomes a space
pub const fn printable(c: char) -> u8 {
    let code = c as u32;
    if code >= FIRST_CHAR as u32 && code <= LAST_CHAR as u32 {
        code as u8
    } else {
        b' '
    }
}

/// One rendered glyph, packed like a region source
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    len: usize,
    bytes: [u8; MAX_GLYPH_BYTES],
}

impl GlyphBitmap {
    /// Packed rows, `ceil(width / 8)` bytes each
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Pixel at (`col`, `row`) inside the glyph
    pub fn pixel(&self, col: usize, row: usize) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let stride = self.width.div_ceil(8);
        self.bytes[row * stride + col / 8] & (0x80 >> (col % 8)) != 0
    }
}

impl core::fmt::Debug for GlyphBitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

/// Render `c` in `font` with `mode`
///
/// `current(col, row)` reports the pixel already shown under glyph cell
/// (`col`, `row`); only [`Mode::Xor`] consults it. Characters outside
/// 0x20..=0x7E render as a space.
pub fn render_char<F>(c: char, font: &Font, mode: Mode, current: F) -> GlyphBitmap
where
    F: Fn(usize, usize) -> bool,
{
    let source = font.glyph(c);
    let width = font.width() as usize;
    let height = font.height() as usize;
    let stride = font.stride();
    let len = source.len().min(MAX_GLYPH_BYTES);

    let mut bytes = [0u8; MAX_GLYPH_BYTES];
    if mode == Mode::Overwrite {
        bytes[..len].copy_from_slice(&source[..len]);
    } else {
        for row in 0..height {
            for col in 0..width {
                let index = row * stride + col / 8;
                if index >= len {
                    continue;
                }
                let mask = 0x80 >> (col % 8);
                let glyph = source[index] & mask != 0;
                if mode.apply(glyph, current(col, row)) {
                    bytes[index] |= mask;
                }
            }
        }
    }

    GlyphBitmap {
        width,
        height,
        len,
        bytes,
    }
}

/// Positions of the characters of `text` that fit before pixel column `limit`
///
/// The cursor starts at `x` and advances by `font.width() + spacing` per
/// character. Placement stops at the first glyph that would cross `limit`, so
/// no partial glyph is ever produced.
pub fn layout<'a>(
    text: &'a str,
    x: usize,
    font: &Font,
    spacing: usize,
    limit: usize,
) -> impl Iterator<Item = (usize, char)> + 'a {
    let width = font.width() as usize;
    let advance = width.saturating_add(spacing);
    text.chars()
        .scan(x, move |cursor, c| {
            let at = *cursor;
            *cursor = cursor.saturating_add(advance);
            Some((at, c))
        })
        .take_while(move |&(at, _)| at.saturating_add(width) <= limit)
}

#[cfg(test)]
mod tests {
    use super::font::{FontSize, FONT_12X24, FONT_6X8, FONT_8X16};
    use super::*;
    use std::vec::Vec;

    fn blank(_: usize, _: usize) -> bool {
        false
    }

    #[test]
    fn overwrite_copies_the_table() {
        let glyph = render_char('A', &FONT_8X16, Mode::Overwrite, blank);
        assert_eq!(glyph.as_bytes(), FONT_8X16.glyph('A'));
        assert_eq!((glyph.width, glyph.height), (8, 16));
    }

    #[test]
    fn unprintable_renders_as_space() {
        for size in [FontSize::Small, FontSize::Standard, FontSize::Large] {
            let font = size.font();
            for mode in [Mode::Overwrite, Mode::Invert, Mode::Xor] {
                let space = render_char(' ', font, mode, blank);
                for c in ['\0', '\t', '\u{1F}', '\u{7F}', 'ä', '€'] {
                    assert_eq!(render_char(c, font, mode, blank), space);
                }
            }
        }
    }

    #[test]
    fn invert_flips_only_cell_pixels() {
        let glyph = render_char(' ', &FONT_6X8, Mode::Invert, blank);
        // six pixels per row, the two padding bits stay clear
        assert!(glyph.as_bytes().iter().all(|&b| b == 0b1111_1100));

        let normal = render_char('k', &FONT_12X24, Mode::Overwrite, blank);
        let inverted = render_char('k', &FONT_12X24, Mode::Invert, blank);
        for row in 0..24 {
            for col in 0..12 {
                assert_eq!(inverted.pixel(col, row), !normal.pixel(col, row));
            }
        }
    }

    #[test]
    fn xor_reads_the_current_pixels() {
        let normal = render_char('X', &FONT_8X16, Mode::Overwrite, blank);
        let over_blank = render_char('X', &FONT_8X16, Mode::Xor, blank);
        assert_eq!(over_blank, normal);

        let checker = |col: usize, row: usize| (col + row) % 2 == 0;
        let toggled = render_char('X', &FONT_8X16, Mode::Xor, checker);
        for row in 0..16 {
            for col in 0..8 {
                assert_eq!(toggled.pixel(col, row), normal.pixel(col, row) ^ checker(col, row));
            }
        }
    }

    #[test]
    fn layout_advances_by_width_and_spacing() {
        let placed: Vec<_> = layout("AB2", 0, &FONT_6X8, 1, 64).collect();
        assert_eq!(placed, [(0, 'A'), (7, 'B'), (14, '2')]);
    }

    #[test]
    fn layout_truncates_without_partial_glyphs() {
        // 8 px glyphs with 1 px spacing: 0, 9, ... 54 fits, 63 would end at 71
        let placed: Vec<_> = layout("ABCDEFGHIJ", 0, &FONT_8X16, 1, 64).collect();
        assert_eq!(placed.len(), 7);
        assert_eq!(placed.last(), Some(&(54, 'G')));

        let exact: Vec<_> = layout("ABCD", 32, &FONT_8X16, 0, 64).collect();
        assert_eq!(exact.len(), 4);
        assert_eq!(layout("A", 60, &FONT_8X16, 0, 64).count(), 0);
    }

    #[test]
    fn layout_saturates_instead_of_overflowing() {
        let placed: Vec<_> = layout("ABC", 0, &FONT_8X16, usize::MAX, 64).collect();
        assert_eq!(placed, [(0, 'A')]);
        assert_eq!(layout("A", usize::MAX, &FONT_8X16, 0, 64).count(), 0);
    }

    #[test]
    fn mode_truth_table() {
        assert!(Mode::Overwrite.apply(true, false));
        assert!(!Mode::Overwrite.apply(false, true));
        assert!(Mode::Invert.apply(false, false));
        assert!(!Mode::Invert.apply(true, true));
        assert!(Mode::Xor.apply(true, false));
        assert!(!Mode::Xor.apply(true, true));
        assert!(Mode::Xor.apply(false, true));
    }
}
