//! `embedded-graphics` support for the raster
//!
//! Anything drawn this way lands in the raster only; call
//! [`Display::flush`](crate::Display::flush) to push it to the panel.
//!
//! `Framebuffer::clear(bool)` shadows [`DrawTarget::clear`] on method calls, use
//! the trait path to clear with a color.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::raster::Framebuffer;

impl<const N: usize> DrawTarget for Framebuffer<N> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // negative coordinates are off screen
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Framebuffer::<N>::clear(self, color.is_on());
        Ok(())
    }
}

impl<const N: usize> OriginDimensions for Framebuffer<N> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::buffer_len;
    use embedded_graphics::{
        mono_font::{ascii::FONT_6X10, MonoTextStyle},
        primitives::{Line, PrimitiveStyle, Rectangle},
        text::{Baseline, Text},
    };

    type Raster = Framebuffer<{ buffer_len(64, 32) }>;

    #[test]
    fn reports_raster_size() {
        let raster = Raster::new(64, 32).unwrap();
        assert_eq!(raster.size(), Size::new(64, 32));
        assert_eq!(raster.bounding_box(), Rectangle::new(Point::zero(), Size::new(64, 32)));
    }

    #[test]
    fn filled_rectangle_sets_exactly_its_pixels() {
        let mut raster = Raster::new(64, 32).unwrap();
        Rectangle::new(Point::new(3, 2), Size::new(10, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut raster)
            .unwrap();

        for y in 0..32 {
            for x in 0..64 {
                let inside = (3..13).contains(&x) && (2..6).contains(&y);
                assert_eq!(raster.get_pixel(x, y), Some(inside), "({x}, {y})");
            }
        }
    }

    #[test]
    fn off_screen_pixels_are_dropped() {
        let mut raster = Raster::new(64, 32).unwrap();
        Line::new(Point::new(-10, 5), Point::new(80, 5))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut raster)
            .unwrap();

        assert!(raster.row(5).unwrap().iter().all(|&b| b == 0xFF));
        assert_eq!(raster.as_bytes().iter().filter(|&&b| b != 0).count(), 8);
    }

    #[test]
    fn mono_font_text_and_trait_clear() {
        let mut raster = Raster::new(64, 32).unwrap();
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline("Hi", Point::zero(), style, Baseline::Top)
            .draw(&mut raster)
            .unwrap();
        assert!(raster.as_bytes().iter().any(|&b| b != 0));
        // nothing outside the two glyph cells
        for y in 10..32 {
            assert!(raster.row(y).unwrap().iter().all(|&b| b == 0));
        }

        DrawTarget::clear(&mut raster, BinaryColor::On).unwrap();
        assert!(raster.as_bytes().iter().all(|&b| b == 0xFF));
    }
}
