//! Monochrome dot-matrix display driver
//!
//! Drives bit-addressable LCD/LED panels from a pixel and character API down to
//! the bytes a controller expects.
//!
//! ### Usage
//! The driver keeps one packed raster in memory and pushes the rows it touches to
//! the panel. To display something you:
//!
//! 1. create a [`raster::Framebuffer`] sized for the panel
//! 1. wrap a [`transport::Transport`] (for example [`ist3931::Ist3931`]) and the
//!    raster in a [`display::Display`]
//! 1. draw with [`display::Display::draw_string`], [`display::Display::write_region`]
//!    or any [`embedded_graphics`] primitive on [`display::Display::raster_mut`]
//!    followed by [`display::Display::flush`]
//!
//! The panel cannot be read back, so the raster is the only copy of what is shown.
//! After a transport failure call [`display::Display::flush`] to resynchronize.
#![no_std]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod glyph;
pub mod graphics;
pub mod ist3931;
pub mod raster;
pub mod transport;

pub use display::{Display, Error};
pub use glyph::{font::FontSize, Mode};
pub use raster::{buffer_len, Framebuffer, PanelVariant, RegionError};
pub use transport::{RamAddress, Transport};
