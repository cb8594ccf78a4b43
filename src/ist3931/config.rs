//! Panel configuration
//!
//! Captured once when the driver is built. Field names follow the register
//! fields they end up in.

use crate::raster::PanelVariant;

/// IST3931 panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Voltage converter enable
    pub vc: bool,
    /// Voltage follower enable
    pub vf: bool,
    /// Bias ratio select, 0..=7
    pub bias: u8,
    /// Contrast
    pub ct: u8,
    /// Duty (number of COM lines driven)
    pub duty: u8,
    /// Frame rate divider
    pub fr: u16,
    /// COM scan direction, COM1 -> COMN when set
    pub shl: bool,
    /// SEG scan direction, reversed when set
    pub adc: bool,
    /// All pixels on
    pub eon: bool,
    /// Reverse display, RAM 1 shows as off
    pub rev: bool,
    /// Added to every byte column address
    pub x_offset: u8,
    /// Added to every row address
    pub y_offset: u8,
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// How logical rows map onto COM lines
    pub variant: PanelVariant,
}

impl Config {
    /// 64x32 module with interleaved COM wiring
    pub const fn laowang() -> Self {
        Config {
            vc: true,
            vf: true,
            bias: 2,
            ct: 150,
            duty: 32,
            fr: 60,
            shl: true,
            adc: false,
            eon: false,
            rev: false,
            x_offset: 0,
            y_offset: 0,
            width: 64,
            height: 32,
            variant: PanelVariant::interleaved(32),
        }
    }

    /// Panel of `width` x `height` with rows wired in order
    pub const fn linear(width: u16, height: u16) -> Self {
        let mut config = Self::laowang();
        config.width = width;
        config.height = height;
        config.duty = height as u8;
        config.variant = PanelVariant::Linear;
        config
    }

    /// Shift the visible window inside controller RAM
    pub const fn with_offsets(mut self, x_offset: u8, y_offset: u8) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Start with a different contrast
    pub const fn with_contrast(mut self, ct: u8) -> Self {
        self.ct = ct;
        self
    }

    /// Use a different row mapping
    pub const fn with_variant(mut self, variant: PanelVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Bytes needed for a raster of this panel
    pub const fn buffer_len(&self) -> usize {
        crate::raster::buffer_len(self.width as usize, self.height as usize)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::laowang()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laowang_defaults() {
        let config = Config::default();
        assert_eq!(config, Config::laowang());
        assert_eq!(config.variant, PanelVariant::Interleaved { half_height: 16 });
        assert_eq!(config.buffer_len(), 256);
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::linear(128, 64).with_offsets(2, 4).with_contrast(0x20);
        assert_eq!(config.variant, PanelVariant::Linear);
        assert_eq!((config.x_offset, config.y_offset), (2, 4));
        assert_eq!(config.ct, 0x20);
        assert_eq!(config.duty, 64);
        assert_eq!(config.buffer_len(), 1024);
    }
}
