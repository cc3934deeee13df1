//! HD44780 instruction set and PCF8574 wire layout
//!
//! Instruction bytes are the base opcode OR'd with the option masks
//! defined next to it. The wire bit indices describe how the PCF8574
//! backpack maps its 8 outputs onto the controller's control lines.

/// Clear the entire display and reset the address counter
pub const CLEAR_DISPLAY: u8 = 0x01;
/// Return the cursor to the origin (DDRAM address 0)
pub const RETURN_HOME: u8 = 0x02;

/// Set the entry mode (what moves after each data write, and which way)
pub const ENTRY_MODE_SET: u8 = 0x04;
/// The cursor moves, the display stays put
pub const ENTRY_CURSOR_MOVE: u8 = 0x00;
/// The display shifts, the cursor stays put
pub const ENTRY_DISPLAY_SHIFT: u8 = 0x01;
/// DDRAM address decrements after each write
pub const ENTRY_DECREMENT: u8 = 0x00;
/// DDRAM address increments after each write
pub const ENTRY_INCREMENT: u8 = 0x02;

/// Display on/off control (display, underline cursor, blink)
pub const DISPLAY_CONTROL: u8 = 0x08;
/// Blinking block cursor enabled
pub const BLINK_ON: u8 = 0x01;
/// Underline cursor enabled
pub const CURSOR_ON: u8 = 0x02;
/// Display enabled
pub const DISPLAY_ON: u8 = 0x04;

/// Shift the cursor or the display without writing data
pub const SHIFT: u8 = 0x10;
/// Move the cursor left
pub const SHIFT_CURSOR_LEFT: u8 = 0x00;
/// Move the cursor right
pub const SHIFT_CURSOR_RIGHT: u8 = 0x04;
/// Scroll the display left
pub const SHIFT_DISPLAY_LEFT: u8 = 0x08;
/// Scroll the display right
pub const SHIFT_DISPLAY_RIGHT: u8 = 0x0C;

/// Function set (bus width, line count, character cell dot format)
pub const FUNCTION_SET: u8 = 0x20;
/// 5x8 dot character cells
pub const FUNC_5X8_DOTS: u8 = 0x00;
/// 5x11 dot character cells
pub const FUNC_5X11_DOTS: u8 = 0x04;
/// Single-line display
pub const FUNC_1_LINE: u8 = 0x00;
/// Two-line display
pub const FUNC_2_LINES: u8 = 0x08;
/// 4-bit bus transfers (two nibbles per byte)
pub const FUNC_4BIT_BUS: u8 = 0x00;
/// 8-bit bus transfers
pub const FUNC_8BIT_BUS: u8 = 0x10;

/// Set the CGRAM (glyph pattern memory) address
pub const SET_CGRAM_ADDR: u8 = 0x40;
/// Set the DDRAM (display data memory) address
pub const SET_DDRAM_ADDR: u8 = 0x80;

/// DDRAM base address of the first row
pub const ROW0_BASE: u8 = 0x00;
/// DDRAM base address of the second row
pub const ROW1_BASE: u8 = 0x40;
/// DDRAM cells per row (40 columns)
pub const ROW_WIDTH: u8 = 0x28;

/// PCF8574 output bit driving the register-select line (1 = data)
pub const RS_BIT: u8 = 0;
/// PCF8574 output bit driving the read/write line (always 0 = write)
pub const RW_BIT: u8 = 1;
/// PCF8574 output bit driving the enable strobe
pub const EN_BIT: u8 = 2;
/// PCF8574 output bit driving the backlight transistor
pub const BACKLIGHT_BIT: u8 = 3;

/// Default 7-bit bus address of the PCF8574 backpack
///
/// Vendor documentation often quotes the shifted write address 0x4E
/// (`0x27 << 1`); embedded-hal takes the 7-bit form.
pub const DEFAULT_ADDRESS: u8 = 0x27;
