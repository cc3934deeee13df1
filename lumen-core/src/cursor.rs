//! Software model of the controller's DDRAM address counter
//!
//! The two rows of a 40-column display sit at `0x00..0x28` and
//! `0x40..0x68`; the range `0x28..0x40` is unmapped and must be skipped
//! when stepping across a row boundary. The controller auto-moves its own
//! counter after every data write, so [`advance`](CursorAddress::advance)
//! and [`retreat`](CursorAddress::retreat) only update the software copy
//! and rely on the hardware having landed on the same address. That
//! assumption breaks once the display has been scrolled; the model does
//! not try to detect or repair it.

use crate::cmd;

/// End of row 0's mapped range (exclusive)
const ROW0_END: u8 = cmd::ROW0_BASE + cmd::ROW_WIDTH;
/// End of row 1's mapped range (exclusive)
const ROW1_END: u8 = cmd::ROW1_BASE + cmd::ROW_WIDTH;

/// Tracked DDRAM address counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorAddress {
    addr: u8,
}

impl CursorAddress {
    /// Set the address from a row/column pair
    ///
    /// Returns `false` without changing anything if `row` is not 0 or 1
    /// or `col` exceeds the row width. `col` equal to the row width is
    /// accepted and lands one past the last cell; inherited behavior,
    /// kept until a hardware owner calls it a defect.
    pub fn set_position(&mut self, row: u8, col: u8) -> bool {
        if row > 1 || col > cmd::ROW_WIDTH {
            return false;
        }

        let base = if row != 0 { cmd::ROW1_BASE } else { cmd::ROW0_BASE };
        self.addr = base + col;
        true
    }

    /// Step the address forward one cell, wrapping row1-end -> row0-base
    /// and skipping the unmapped gap between the rows
    pub fn advance(&mut self) {
        self.addr += 1;
        if self.addr >= ROW1_END {
            self.addr = cmd::ROW0_BASE;
        } else if self.addr < cmd::ROW1_BASE && self.addr >= ROW0_END {
            self.addr = cmd::ROW1_BASE;
        }
    }

    /// Step the address back one cell; exact inverse of [`advance`](Self::advance)
    pub fn retreat(&mut self) {
        if self.addr == cmd::ROW0_BASE {
            self.addr = ROW1_END - 1;
        } else if self.addr == cmd::ROW1_BASE {
            self.addr = ROW0_END - 1;
        } else {
            self.addr -= 1;
        }
    }

    /// Reset to the origin (row 0, column 0)
    pub fn home(&mut self) {
        self.addr = cmd::ROW0_BASE;
    }

    /// Current row (0 or 1)
    pub fn row(&self) -> u8 {
        if self.addr >= cmd::ROW1_BASE {
            1
        } else {
            0
        }
    }

    /// Current column within the row
    pub fn column(&self) -> u8 {
        let base = if self.addr >= cmd::ROW1_BASE {
            cmd::ROW1_BASE
        } else {
            cmd::ROW0_BASE
        };
        self.addr - base
    }

    /// Raw DDRAM address, as sent in a set-DDRAM-address instruction
    pub fn address(&self) -> u8 {
        self.addr
    }
}
