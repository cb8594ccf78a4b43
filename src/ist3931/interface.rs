//! Display interface using I2C
use crate::ist3931::{cmd::Cmd, flag::Flag};
use display_interface::DisplayError;
use embedded_hal::i2c::I2c;

/// Byte-level connection to an IST3931
///
/// Every payload byte goes out behind its own control byte, so a transaction
/// carries at most [`Flag::RAM_COLUMNS`] payload bytes.
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wrap a bus, talking to the device at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        I2cInterface { i2c, address }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    #[cfg(test)]
    pub(crate) fn bus(&self) -> &I2C {
        &self.i2c
    }
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        self.write_bus(Flag::CONTROL_COMMAND, commands)
    }

    /// Basic function for sending display data at the current RAM address
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.write_bus(Flag::CONTROL_DATA, data)
    }

    /// Point the row counter at `row`
    pub(crate) fn set_ay(&mut self, row: u8) -> Result<(), DisplayError> {
        self.cmd(&[
            Cmd::SET_AY_ADD_LSB | (row & Flag::NIBBLE_MASK),
            Cmd::SET_AY_ADD_MSB | (row >> 4),
        ])
    }

    /// Point the column counter at byte `column`
    pub(crate) fn set_ax(&mut self, column: u8) -> Result<(), DisplayError> {
        self.cmd(&[Cmd::SET_AX_ADD | column])
    }

    fn write_bus(&mut self, control: u8, bytes: &[u8]) -> Result<(), DisplayError> {
        let mut frame = [0u8; 2 * Flag::RAM_COLUMNS];

        for chunk in bytes.chunks(Flag::RAM_COLUMNS) {
            for (pair, &byte) in frame.chunks_exact_mut(2).zip(chunk) {
                pair[0] = control;
                pair[1] = byte;
            }
            let len = chunk.len() * 2;

            match self.i2c.write(self.address, &frame[..len]) {
                Ok(()) => {}
                Err(e) => {
                    log::error!(
                        "I2C write error at 0x{:02X} (control 0x{:02X}, {} bytes): {:?}",
                        self.address,
                        control,
                        chunk.len(),
                        e
                    );
                    return Err(DisplayError::BusWriteError);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ist3931::mock::MockI2c;
    use std::vec;

    #[test]
    fn every_byte_gets_a_control_byte() {
        let mut interface = I2cInterface::new(MockI2c::default(), Flag::I2C_ADDRESS);
        interface.cmd(&[0xB1, 0x96]).unwrap();
        interface.data(&[0xAA]).unwrap();

        let i2c = interface.release();
        assert_eq!(
            i2c.writes,
            [
                (0x3F, vec![0x80, 0xB1, 0x80, 0x96]),
                (0x3F, vec![0xC0, 0xAA]),
            ]
        );
    }

    #[test]
    fn long_payloads_are_chunked() {
        let mut interface = I2cInterface::new(MockI2c::default(), Flag::I2C_ADDRESS);
        let payload: std::vec::Vec<u8> = (0..40).collect();
        interface.data(&payload).unwrap();

        let i2c = interface.release();
        let sizes: std::vec::Vec<_> = i2c.writes.iter().map(|(_, w)| w.len()).collect();
        assert_eq!(sizes, [36, 36, 8]);
        let sent: std::vec::Vec<u8> = i2c
            .writes
            .iter()
            .flat_map(|(_, w)| w.chunks(2).map(|p| p[1]))
            .collect();
        assert_eq!(sent, payload);
    }

    #[test]
    fn row_address_splits_into_nibbles() {
        let mut interface = I2cInterface::new(MockI2c::default(), Flag::I2C_ADDRESS);
        interface.set_ay(0x5A).unwrap();
        interface.set_ax(0x11).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes[0].1, [0x80, 0x0A, 0x80, 0x15]);
        assert_eq!(i2c.writes[1].1, [0x80, 0xD1]);
    }

    #[test]
    fn bus_errors_become_bus_write_errors() {
        let mut interface = I2cInterface::new(
            MockI2c {
                fail_after: Some(0),
                ..MockI2c::default()
            },
            Flag::I2C_ADDRESS,
        );
        assert!(matches!(
            interface.data(&[1, 2, 3]),
            Err(DisplayError::BusWriteError)
        ));
    }
}
