//! Recording doubles for the embedded-hal traits used by the driver

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use std::vec::Vec;

/// Records every write; fails once `fail_after` writes went through
#[derive(Debug, Default)]
pub(crate) struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail_after: Option<usize>,
}

impl MockI2c {
    /// Payload bytes of the command transactions, control bytes stripped
    pub fn commands(&self) -> Vec<u8> {
        self.payloads(0x80)
    }

    /// Payload bytes of the data transactions, control bytes stripped
    pub fn data(&self) -> Vec<u8> {
        self.payloads(0xC0)
    }

    fn payloads(&self, control: u8) -> Vec<u8> {
        self.writes
            .iter()
            .flat_map(|(_, frame)| frame.chunks(2))
            .filter(|pair| pair[0] == control)
            .map(|pair| pair[1])
            .collect()
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            if let Operation::Write(bytes) = operation {
                if self.fail_after == Some(self.writes.len()) {
                    return Err(ErrorKind::Other);
                }
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}

/// Sums up requested delays instead of sleeping
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub total_ns: u64,
    pub calls: Vec<u32>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}
