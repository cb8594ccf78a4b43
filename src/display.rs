//! Panel driver
//!
//! [`Display`] owns the raster, the bus and the panel's row mapping. Every
//! drawing call first merges into the raster, then pushes the touched bytes of
//! each affected row to the controller at its physical address.
//!
//! ## Failure model
//!
//! Region checks run before anything is written, so a rejected call changes
//! neither the raster nor the panel. A transport failure is returned as soon as
//! it happens; by then the raster already holds the new pixels but the panel may
//! only show part of them. Call [`Display::flush`] (or `clear` and redraw) to
//! bring the panel back in sync.

use crate::glyph::{self, font::Font, Mode};
use crate::raster::{Framebuffer, PanelVariant, Region, RegionError};
use crate::transport::{DisplayError, RamAddress, Transport};

/// Errors returned by [`Display`]
#[derive(Debug, Clone)]
pub enum Error {
    /// The request does not fit the raster; nothing was written
    Region(RegionError),
    /// The controller bus rejected a write
    Transport(DisplayError),
}

impl From<RegionError> for Error {
    fn from(error: RegionError) -> Self {
        Error::Region(error)
    }
}

impl From<DisplayError> for Error {
    fn from(error: DisplayError) -> Self {
        Error::Transport(error)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Region(error) => write!(f, "{error}"),
            Error::Transport(error) => write!(f, "transport failure: {error:?}"),
        }
    }
}

/// Monochrome panel driver
///
/// ## Type Parameters
///
/// - `T` - bus to the controller
/// - `N` - raster capacity in bytes, see [`crate::raster::buffer_len`]
pub struct Display<T, const N: usize> {
    transport: T,
    raster: Framebuffer<N>,
    variant: PanelVariant,
}

impl<T, const N: usize> Display<T, N>
where
    T: Transport,
{
    /// Wrap a transport and a raster; nothing is sent yet
    ///
    /// An interleaved `variant` must split exactly the raster's rows, see
    /// [`PanelVariant::interleaved`].
    pub fn new(
        transport: T,
        raster: Framebuffer<N>,
        variant: PanelVariant,
    ) -> Result<Self, RegionError> {
        if !variant.matches_height(raster.height()) {
            let half_height = match variant {
                PanelVariant::Interleaved { half_height } => half_height,
                PanelVariant::Linear => 0,
            };
            return Err(RegionError::VariantMismatch {
                height: raster.height(),
                half_height,
            });
        }
        Ok(Display {
            transport,
            raster,
            variant,
        })
    }

    /// Fill the raster with `value` and push every row
    pub fn clear(&mut self, value: bool) -> Result<(), Error> {
        self.raster.clear(value);
        self.flush()
    }

    /// Merge a packed rectangle at (`x`, `y`) and push the touched rows
    pub fn write_region(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        source: &[u8],
    ) -> Result<(), Error> {
        let region = self.raster.write_region(x, y, width, height, source)?;
        self.flush_region(&region)
    }

    /// Draw one character with its top-left corner at (`x`, `y`)
    ///
    /// Characters outside printable ASCII are drawn as a space.
    pub fn draw_char(
        &mut self,
        x: usize,
        y: usize,
        c: char,
        font: &Font,
        mode: Mode,
    ) -> Result<(), Error> {
        let cell = Region::new(x, y, font.width() as usize, font.height() as usize);
        self.raster.check_bounds(&cell)?;

        let raster = &self.raster;
        let glyph = glyph::render_char(c, font, mode, |col, row| {
            raster.get_pixel(x + col, y + row).unwrap_or(false)
        });
        self.write_region(x, y, glyph.width, glyph.height, glyph.as_bytes())
    }

    /// Draw `text` left to right starting at (`x`, `y`)
    ///
    /// Each character advances the cursor by `font.width() + spacing`. Drawing
    /// stops before the first glyph that would cross the right edge. Returns the
    /// number of characters drawn.
    pub fn draw_string(
        &mut self,
        x: usize,
        y: usize,
        text: &str,
        font: &Font,
        mode: Mode,
        spacing: usize,
    ) -> Result<usize, Error> {
        let mut drawn = 0;
        for (at, c) in glyph::layout(text, x, font, spacing, self.raster.width()) {
            self.draw_char(at, y, c, font, mode)?;
            drawn += 1;
        }

        let total = text.chars().count();
        if drawn < total {
            log::warn!("Truncated text at x={}: drew {}/{} characters", x, drawn, total);
        }
        Ok(drawn)
    }

    /// Push the whole raster to the panel
    pub fn flush(&mut self) -> Result<(), Error> {
        let width = self.raster.width();
        let height = self.raster.height();
        self.flush_region(&Region::new(0, 0, width, height))
    }

    /// The raster as last drawn
    pub fn raster(&self) -> &Framebuffer<N> {
        &self.raster
    }

    /// Draw on the raster directly, e.g. with `embedded-graphics`; call
    /// [`Self::flush`] afterwards to show the result
    pub fn raster_mut(&mut self) -> &mut Framebuffer<N> {
        &mut self.raster
    }

    /// Row mapping in use
    pub fn variant(&self) -> PanelVariant {
        self.variant
    }

    /// Underlying bus, for controller specific commands
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Take the parts back
    pub fn release(self) -> (T, Framebuffer<N>) {
        (self.transport, self.raster)
    }

    fn flush_region(&mut self, region: &Region) -> Result<(), Error> {
        let Some((start, end)) = region.byte_span() else {
            return Ok(());
        };
        log::debug!(
            "Flushing rows {}..{} bytes {}..={}",
            region.y,
            region.y + region.height,
            start,
            end
        );

        let column = u16::try_from(start).map_err(|_| {
            log::error!("Byte column {} does not fit a RAM address", start);
            Error::Transport(DisplayError::OutOfBoundsError)
        })?;

        for row in region.rows() {
            let Some(bytes) = self.raster.row(row) else {
                break;
            };
            let Ok(logical) = u16::try_from(row) else {
                log::error!("Row {} does not fit a RAM address", row);
                return Err(Error::Transport(DisplayError::OutOfBoundsError));
            };
            let address = RamAddress::new(self.variant.to_physical(logical), column);
            self.transport
                .send(address, false, &bytes[start..=end])
                .map_err(|e| {
                    log::error!("Failed to send row {} to {:?}: {:?}", row, address, e);
                    Error::Transport(e)
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::font::{FONT_6X8, FONT_8X16};
    use crate::raster::buffer_len;
    use std::vec::Vec;

    type Raster = Framebuffer<{ buffer_len(64, 32) }>;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Sent {
        address: RamAddress,
        is_command: bool,
        bytes: Vec<u8>,
    }

    /// Records every send; fails once `fail_after` sends went through
    #[derive(Default)]
    struct Recorder {
        sent: Vec<Sent>,
        fail_after: Option<usize>,
    }

    impl Transport for Recorder {
        fn send(
            &mut self,
            address: RamAddress,
            is_command: bool,
            bytes: &[u8],
        ) -> Result<(), DisplayError> {
            if self.fail_after == Some(self.sent.len()) {
                return Err(DisplayError::BusWriteError);
            }
            self.sent.push(Sent {
                address,
                is_command,
                bytes: bytes.to_vec(),
            });
            Ok(())
        }
    }

    fn laowang(recorder: Recorder) -> Display<Recorder, { buffer_len(64, 32) }> {
        Display::new(
            recorder,
            Raster::new(64, 32).unwrap(),
            PanelVariant::interleaved(32),
        )
        .unwrap()
    }

    #[test]
    fn clear_pushes_every_row_at_its_physical_address() {
        let mut display = laowang(Recorder::default());
        display.clear(true).unwrap();

        let sent = &display.transport_mut().sent;
        assert_eq!(sent.len(), 32);
        for (row, entry) in sent.iter().enumerate() {
            assert!(!entry.is_command);
            assert_eq!(entry.bytes, [0xFF; 8]);
            assert_eq!(
                entry.address,
                RamAddress::new(PanelVariant::interleaved(32).to_physical(row as u16), 0)
            );
        }
        assert_eq!(sent[1].address.row, 16);
    }

    #[test]
    fn draw_char_pushes_only_touched_bytes() {
        let mut display = laowang(Recorder::default());
        display.draw_char(3, 2, 'A', &FONT_8X16, Mode::Overwrite).unwrap();

        let sent = &display.transport_mut().sent;
        assert_eq!(sent.len(), 16);
        assert_eq!(sent[0].address, RamAddress::new(1, 0));
        assert_eq!(sent[1].address, RamAddress::new(17, 0));
        assert!(sent.iter().all(|s| s.bytes.len() == 2));

        let glyph = FONT_8X16.glyph('A');
        for (row, entry) in sent.iter().enumerate() {
            assert_eq!(entry.bytes[0], glyph[row] >> 3);
            assert_eq!(entry.bytes[1], glyph[row] << 5);
        }
    }

    #[test]
    fn rejected_region_sends_nothing() {
        let mut display = laowang(Recorder::default());
        let err = display.write_region(60, 0, 8, 1, &[0xFF]).unwrap_err();
        assert!(matches!(
            err,
            Error::Region(RegionError::OutOfBounds {
                x: 60,
                y: 0,
                width: 8,
                height: 1
            })
        ));
        assert!(display.draw_char(0, 20, 'A', &FONT_8X16, Mode::Overwrite).is_err());
        assert!(display.transport_mut().sent.is_empty());
        assert!(display.raster().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn draw_string_truncates_at_the_last_full_glyph() {
        let mut display = laowang(Recorder::default());
        let drawn = display
            .draw_string(0, 0, "ABCDEFGHIJ", &FONT_8X16, Mode::Overwrite, 1)
            .unwrap();
        assert_eq!(drawn, 7);
        // the eighth glyph would start at 63 and end past the edge
        for row in 0..16 {
            assert_eq!(display.raster().get_pixel(63, row), Some(false));
        }
        assert_eq!(display.transport_mut().sent.len(), 7 * 16);
    }

    #[test]
    fn draw_string_places_small_font() {
        let mut display = laowang(Recorder::default());
        let drawn = display
            .draw_string(0, 16, "AB2", &FONT_6X8, Mode::Overwrite, 1)
            .unwrap();
        assert_eq!(drawn, 3);

        let glyph = FONT_6X8.glyph('B');
        for row in 0..8 {
            for col in 0..6 {
                let expected = glyph[row] & (0x80 >> col) != 0;
                assert_eq!(display.raster().get_pixel(7 + col, 16 + row), Some(expected));
            }
        }
    }

    #[test]
    fn xor_twice_restores_the_raster() {
        let mut display = laowang(Recorder::default());
        display.draw_string(0, 0, "XOR", &FONT_8X16, Mode::Overwrite, 0).unwrap();
        let before = display.raster().clone();

        display.draw_char(5, 4, 'W', &FONT_6X8, Mode::Xor).unwrap();
        assert_ne!(display.raster(), &before);
        display.draw_char(5, 4, 'W', &FONT_6X8, Mode::Xor).unwrap();
        assert_eq!(display.raster(), &before);
    }

    #[test]
    fn invert_over_existing_pixels_ignores_them() {
        let mut display = laowang(Recorder::default());
        display.clear(true).unwrap();
        display.draw_char(8, 0, ' ', &FONT_8X16, Mode::Invert).unwrap();
        assert!(display.raster().as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn transport_failure_leaves_raster_ahead_of_panel() {
        let mut display = laowang(Recorder {
            fail_after: Some(20),
            ..Recorder::default()
        });
        let err = display
            .draw_string(0, 0, "AB", &FONT_8X16, Mode::Overwrite, 0)
            .unwrap_err();
        assert!(matches!(err, Error::Transport(DisplayError::BusWriteError)));
        // all of 'B' is in the raster even though only four of its rows went out
        for row in 0..16 {
            assert_eq!(display.raster().row(row).unwrap()[1], FONT_8X16.glyph('B')[row]);
        }

        display.transport_mut().fail_after = None;
        display.flush().unwrap();
        assert_eq!(display.transport_mut().sent.len(), 20 + 32);
    }

    #[test]
    fn release_returns_the_parts() {
        let mut display = laowang(Recorder::default());
        display.clear(false).unwrap();
        let (recorder, raster) = display.release();
        assert_eq!(recorder.sent.len(), 32);
        assert_eq!(raster.width(), 64);
    }

    #[test]
    fn glyph_past_the_edge_is_rejected_in_every_mode() {
        let mut display = laowang(Recorder::default());
        for mode in [Mode::Overwrite, Mode::Invert, Mode::Xor] {
            let err = display
                .draw_char(usize::MAX, 0, 'A', &FONT_8X16, mode)
                .unwrap_err();
            assert!(matches!(err, Error::Region(RegionError::OutOfBounds { .. })));
            assert!(display
                .draw_char(60, usize::MAX - 3, 'A', &FONT_6X8, mode)
                .is_err());
        }
        assert!(display.transport_mut().sent.is_empty());
        assert!(display.raster().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn huge_spacing_draws_only_the_first_glyph() {
        let mut display = laowang(Recorder::default());
        let drawn = display
            .draw_string(0, 0, "AB", &FONT_8X16, Mode::Overwrite, usize::MAX)
            .unwrap();
        assert_eq!(drawn, 1);
        assert_eq!(display.transport_mut().sent.len(), 16);
    }

    #[test]
    fn interleave_must_match_the_raster_height() {
        let raster = Framebuffer::<{ buffer_len(64, 64) }>::new(64, 64).unwrap();
        let err = Display::new(Recorder::default(), raster.clone(), PanelVariant::interleaved(32))
            .err()
            .unwrap();
        assert_eq!(
            err,
            RegionError::VariantMismatch {
                height: 64,
                half_height: 16
            }
        );

        let mut display =
            Display::new(Recorder::default(), raster, PanelVariant::interleaved(64)).unwrap();
        display.clear(false).unwrap();
        let mut rows: Vec<u16> = display.transport_mut().sent.iter().map(|s| s.address.row).collect();
        rows.sort_unstable();
        assert_eq!(rows, (0..64).collect::<Vec<u16>>());
    }

    #[test]
    fn rows_beyond_the_address_range_are_refused() {
        const TALL: usize = u16::MAX as usize + 2;
        let raster = Framebuffer::<{ buffer_len(1, TALL) }>::new(1, TALL).unwrap();
        let mut display = Display::new(Recorder::default(), raster, PanelVariant::Linear).unwrap();

        display.write_region(0, TALL - 2, 1, 1, &[0x80]).unwrap();
        let err = display.write_region(0, TALL - 1, 1, 1, &[0x80]).unwrap_err();
        assert!(matches!(err, Error::Transport(DisplayError::OutOfBoundsError)));

        let sent = &display.transport_mut().sent;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].address, RamAddress::new(u16::MAX, 0));
    }
}
