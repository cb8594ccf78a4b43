//! Bitmap fonts for the printable ASCII range

use crate::glyph::data::{FONT_12X24_DATA, FONT_6X8_DATA, FONT_8X16_DATA};

/// First code point with a glyph
pub const FIRST_CHAR: u8 = 0x20;
/// Last code point with a glyph
pub const LAST_CHAR: u8 = 0x7E;

/// Fixed-size bitmap font
///
/// `data` holds one glyph per printable character, `bytes_per_char` bytes each,
/// rows packed MSB-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    width: u8,
    height: u8,
    bytes_per_char: u16,
    data: &'static [u8],
}

/// 6x8 font
pub const FONT_6X8: Font = Font::new(6, 8, &FONT_6X8_DATA);
/// 8x16 font
pub const FONT_8X16: Font = Font::new(8, 16, &FONT_8X16_DATA);
/// 12x24 font
pub const FONT_12X24: Font = Font::new(12, 24, &FONT_12X24_DATA);

impl Font {
    const fn new(width: u8, height: u8, data: &'static [u8]) -> Self {
        Font {
            width,
            height,
            bytes_per_char: (width as u16).div_ceil(8) * height as u16,
            data,
        }
    }

    /// Glyph width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Bytes of one glyph
    pub const fn bytes_per_char(&self) -> u16 {
        self.bytes_per_char
    }

    /// Bytes per glyph row
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Packed glyph for `c`; anything outside 0x20..=0x7E gets the space glyph
    pub fn glyph(&self, c: char) -> &'static [u8] {
        let code = super::printable(c) as usize - FIRST_CHAR as usize;
        let size = self.bytes_per_char as usize;
        let offset = code * size;
        &self.data[offset..offset + size]
    }
}

/// Font sizes compiled into the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// 6x8
    Small,
    /// 8x16
    Standard,
    /// 12x24
    Large,
}

impl FontSize {
    /// Glyph table for this size
    pub const fn font(self) -> &'static Font {
        match self {
            FontSize::Small => &FONT_6X8,
            FontSize::Standard => &FONT_8X16,
            FontSize::Large => &FONT_12X24,
        }
    }
}

impl From<FontSize> for &'static Font {
    fn from(size: FontSize) -> Self {
        size.font()
    }
}
