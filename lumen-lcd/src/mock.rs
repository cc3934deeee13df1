//! Recording test doubles for the bus and delay seams

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorType, I2c, Operation};
use heapless::Vec;

/// I2C bus double that records every byte put on the wire
pub(crate) struct MockI2c {
    frames: Vec<u8, 512>,
    addresses: Vec<u8, 512>,
}

impl MockI2c {
    pub(crate) fn new() -> Self {
        Self {
            frames: Vec::new(),
            addresses: Vec::new(),
        }
    }

    /// Every byte written, in bus order
    pub(crate) fn frames(&self) -> &[u8] {
        &self.frames
    }

    /// Device address of each recorded byte
    pub(crate) fn addresses(&self) -> &[u8] {
        &self.addresses
    }

    /// Drop everything recorded so far (e.g. the init sequence)
    pub(crate) fn reset(&mut self) {
        self.frames.clear();
        self.addresses.clear();
    }
}

impl ErrorType for MockI2c {
    type Error = Infallible;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    for &b in bytes.iter() {
                        self.frames.push(b).unwrap();
                        self.addresses.push(address).unwrap();
                    }
                }
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

/// Delay double; the driver's fixed sleeps are irrelevant on the host
pub(crate) struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
