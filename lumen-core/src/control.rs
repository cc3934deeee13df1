//! Display-control and entry-mode register state
//!
//! The controller never reports these registers back, so the driver keeps
//! its own copy and rewrites the full operand on every change. Both types
//! here are plain flag sets; packing into the instruction operand happens
//! in [`bits`](DisplayControl::bits).

use crate::cmd;

/// Software copy of the display on/off control register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayControl {
    /// Display enabled (characters visible)
    pub display: bool,
    /// Underline cursor visible
    pub underline: bool,
    /// Blinking block cursor visible
    pub blink: bool,
}

impl DisplayControl {
    /// Pack into the display-control instruction operand
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.display {
            bits |= cmd::DISPLAY_ON;
        }
        if self.underline {
            bits |= cmd::CURSOR_ON;
        }
        if self.blink {
            bits |= cmd::BLINK_ON;
        }
        bits
    }
}

impl Default for DisplayControl {
    /// Power-on default: display enabled, no visible cursor
    fn default() -> Self {
        Self {
            display: true,
            underline: false,
            blink: false,
        }
    }
}

/// Cursor aesthetic requested at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorStyle {
    /// Show the underline cursor
    pub underline: bool,
    /// Show the blinking block cursor
    pub blink: bool,
}

/// Software copy of the entry mode register
///
/// Two independent axes: what moves after a data write (cursor or whole
/// display) and which way the address counter steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EntryModeFlags {
    /// The display shifts instead of the cursor moving
    pub shift_display: bool,
    /// The address counter increments after each write
    pub increment: bool,
}

impl EntryModeFlags {
    /// Pack into the entry-mode instruction operand
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.shift_display {
            bits |= cmd::ENTRY_DISPLAY_SHIFT;
        }
        if self.increment {
            bits |= cmd::ENTRY_INCREMENT;
        }
        bits
    }

    /// Decode to the symbolic entry mode
    ///
    /// The display-shift pairings are inherited as-is from earlier
    /// drivers for this controller: shift+increment reads as
    /// `DisplayDec` and shift+decrement as `DisplayInc`. Do not
    /// "correct" the table without checking on hardware.
    pub fn decode(&self) -> EntryMode {
        match (self.shift_display, self.increment) {
            (false, false) => EntryMode::CursorDec,
            (false, true) => EntryMode::CursorInc,
            (true, true) => EntryMode::DisplayDec,
            (true, false) => EntryMode::DisplayInc,
        }
    }
}

impl Default for EntryModeFlags {
    /// Power-on default: cursor moves, address increments
    fn default() -> Self {
        Self {
            shift_display: false,
            increment: true,
        }
    }
}

/// Symbolic entry mode as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryMode {
    /// Cursor moves right after each write
    CursorInc,
    /// Cursor moves left after each write
    CursorDec,
    /// Display scrolls so new text appears at a fixed column, rightward
    DisplayInc,
    /// Display scrolls so new text appears at a fixed column, leftward
    DisplayDec,
}
