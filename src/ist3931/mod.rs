//! IST3931 Dot-Matrix LCD Driver
//!
//! Used in the 64x32 "laowang" COG module, an I2C part whose odd rows are
//! wired to the upper half of the COM lines.
//!
//! ### Usage
//!
//! 1. build an [`Ist3931`] from an `embedded-hal` I2C bus, a delay and a
//!    [`Config`]; this runs the init sequence
//! 1. hand it to [`crate::Display`] together with a raster sized by
//!    [`Config::buffer_len`] and the config's `variant`; a variant built for
//!    another height is rejected
//! 1. draw; every call pushes the rows it touched
//!
//! ```ignore
//! let config = Config::laowang();
//! let driver = Ist3931::new(i2c, delay, config)?;
//! let raster = Framebuffer::<{ buffer_len(64, 32) }>::new(64, 32)?;
//! let mut display = Display::new(driver, raster, config.variant)?;
//! display.draw_string(0, 0, "Hello", FontSize::Standard.font(), Mode::Overwrite, 1)?;
//! ```

mod cmd;
mod config;
pub mod driver;
mod flag;
pub mod interface;

#[cfg(test)]
mod mock;

pub use cmd::Cmd;
pub use config::Config;
pub use driver::Ist3931;
pub use flag::Flag;
