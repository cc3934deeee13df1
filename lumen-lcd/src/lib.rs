//! HD44780 character LCD driver over a PCF8574 I2C backpack
//!
//! The PCF8574 is an 8-bit parallel expander: four of its outputs feed
//! the controller's data lines (4-bit mode), the rest drive
//! register-select, read/write, the enable strobe and the backlight.
//! Every logical byte therefore becomes two nibbles, each clocked in
//! with a three-phase enable pulse.
//!
//! The driver is generic over [`embedded_hal::i2c::I2c`] and
//! [`embedded_hal::delay::DelayNs`]; the fixed delays after each bus
//! phase double as the controller's processing time, so no busy-flag
//! polling is done (the backpack is wired write-only in practice).
//!
//! The pure controller model (cursor arithmetic, register flags) lives
//! in `lumen-core`; this crate adds the wire framing and timing.
//!
//! # Limitations
//!
//! - Blocking and single-threaded; callers serialize access.
//! - No transport-level recovery: an I2C error is returned, but the
//!   software model keeps whatever state it had.
//! - The cursor model assumes the display has not been scrolled.

#![no_std]

pub mod backpack;
pub mod driver;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types
pub use backpack::{Pcf8574, Target};
pub use driver::{Hd44780, LcdConfig};
pub use lumen_core::{CharSink, CursorStyle, DisplayControl, EntryMode};
