//! Boundary to the controller bus
//!
//! The raster core only produces addresses and byte slices. How they reach the
//! controller (I2C framing, control bytes, chip selects) is up to the
//! implementation, see [`crate::ist3931::Ist3931`] for one.

pub use display_interface::DisplayError;

/// Position in controller display RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RamAddress {
    /// Physical row (COM line), already translated from the logical row
    pub row: u16,
    /// Byte column, eight pixels per column
    pub column: u16,
}

impl RamAddress {
    /// Top-left corner of display RAM
    pub const ORIGIN: RamAddress = RamAddress { row: 0, column: 0 };

    /// Address of byte `column` on physical `row`
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }
}

/// Command and data channel to a panel controller
pub trait Transport {
    /// Send `bytes` to the controller
    ///
    /// With `is_command` set the bytes are controller commands and `address` is
    /// not used. Otherwise they are display data written starting at `address`.
    /// Failures are reported as-is; retrying is up to the caller.
    fn send(&mut self, address: RamAddress, is_command: bool, bytes: &[u8])
        -> Result<(), DisplayError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(
        &mut self,
        address: RamAddress,
        is_command: bool,
        bytes: &[u8],
    ) -> Result<(), DisplayError> {
        (**self).send(address, is_command, bytes)
    }
}
