//! PCF8574 backpack framing
//!
//! One frame on the wire is one byte: `[7:4]` the data nibble, bit 3 the
//! backlight, bit 2 the enable strobe, bit 1 read/write (pinned to
//! write), bit 0 register-select. The controller latches the nibble on
//! the enable edge, so every nibble goes out three times: idle, strobe
//! asserted, idle, each phase followed by a 1 ms delay to satisfy the
//! minimum pulse width and the instruction processing time.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use lumen_core::cmd;

/// Destination register for a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// Instruction register (RS low)
    Command,
    /// Data register (RS high)
    Data,
}

impl Target {
    fn rs_mask(self) -> u8 {
        match self {
            Target::Command => 0,
            Target::Data => 1 << cmd::RS_BIT,
        }
    }
}

/// PCF8574 expander driving the controller's 4-bit bus
///
/// Owns the bus handle, the device address (fixed at construction), the
/// backlight mask and the delay provider. The backlight mask is OR'd
/// into every frame so a transfer never drops the backlight.
pub struct Pcf8574<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    backlight: u8,
}

impl<I2C: I2c, D: DelayNs> Pcf8574<I2C, D> {
    /// Create a backpack on the given 7-bit address with the backlight off
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            backlight: 0,
        }
    }

    /// Send a full byte as two nibble transfers, high nibble first
    ///
    /// The order is load-bearing: in 4-bit mode the controller latches
    /// the high half of a transfer first.
    pub fn send_byte(&mut self, byte: u8, target: Target) -> Result<(), I2C::Error> {
        self.send_nibble(byte >> 4, target)?;
        self.send_nibble(byte & 0x0f, target)
    }

    /// Send a single nibble with the three-phase enable strobe
    ///
    /// Only needed on its own during mode negotiation, before the
    /// controller has committed to 4-bit transfers.
    pub fn send_nibble(&mut self, nibble: u8, target: Target) -> Result<(), I2C::Error> {
        let frame = ((nibble & 0x0f) << 4) | target.rs_mask() | self.backlight;

        for phase in [frame, frame | (1 << cmd::EN_BIT), frame] {
            self.i2c.write(self.address, &[phase])?;
            self.delay.delay_ms(1);
        }
        Ok(())
    }

    /// Switch the backlight on or off
    ///
    /// Standalone single-byte write carrying only the backlight bit; no
    /// RS or strobe bits, so the controller ignores it.
    pub fn set_backlight(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.backlight = if on { 1 << cmd::BACKLIGHT_BIT } else { 0 };
        self.i2c.write(self.address, &[self.backlight])
    }

    /// Flip the backlight state
    pub fn toggle_backlight(&mut self) -> Result<(), I2C::Error> {
        self.backlight ^= 1 << cmd::BACKLIGHT_BIT;
        self.i2c.write(self.address, &[self.backlight])
    }

    /// Whether the backlight is currently on (no bus access)
    pub fn is_backlight_on(&self) -> bool {
        self.backlight != 0
    }

    /// Block for the given number of milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    #[cfg(test)]
    pub(crate) fn i2c(&self) -> &I2C {
        &self.i2c
    }

    #[cfg(test)]
    pub(crate) fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }
}
