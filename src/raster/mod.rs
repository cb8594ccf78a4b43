//! Packed monochrome raster
//!
//! One bit per pixel, `ceil(width / 8)` bytes per row, bit 7 of each byte is
//! the leftmost pixel of its group. Everything in here is pure data manipulation;
//! nothing talks to hardware.

pub mod address;
pub mod error;
pub mod framebuffer;
pub mod region;

pub use address::{page_address, PageAddress, PanelVariant};
pub use error::RegionError;
pub use framebuffer::{buffer_len, Framebuffer};
pub use region::Region;
