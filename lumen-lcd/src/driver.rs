//! HD44780 driver facade
//!
//! Composes the PCF8574 backpack with the software register model from
//! `lumen-core`. Every mutation of display control or entry mode is
//! pushed to the controller in the same call; the model is never read
//! back from hardware, so after a bus error the two can diverge and no
//! attempt is made to resynchronize.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use lumen_core::cmd;
use lumen_core::{CharSink, CursorAddress, CursorStyle, DisplayControl, EntryMode, EntryModeFlags};

use crate::backpack::{Pcf8574, Target};

/// Driver configuration
#[derive(Debug, Clone, Copy)]
pub struct LcdConfig {
    /// 7-bit address of the PCF8574 backpack
    pub address: u8,
    /// Cursor aesthetic applied at initialization
    pub cursor: CursorStyle,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: cmd::DEFAULT_ADDRESS,
            cursor: CursorStyle::default(),
        }
    }
}

/// HD44780 character LCD behind a PCF8574 backpack
///
/// Construct with [`new`](Self::new), then call [`init`](Self::init)
/// once before anything else; the controller's boot state is unknown
/// and every other operation assumes 4-bit mode has been committed.
pub struct Hd44780<I2C, D> {
    bus: Pcf8574<I2C, D>,
    cursor: CursorAddress,
    control: DisplayControl,
    entry: EntryModeFlags,
}

impl<I2C: I2c, D: DelayNs> Hd44780<I2C, D> {
    /// Create the driver; no bus traffic until [`init`](Self::init)
    pub fn new(i2c: I2C, delay: D, config: LcdConfig) -> Self {
        Self {
            bus: Pcf8574::new(i2c, delay, config.address),
            cursor: CursorAddress::default(),
            control: DisplayControl {
                display: true,
                underline: config.cursor.underline,
                blink: config.cursor.blink,
            },
            entry: EntryModeFlags::default(),
        }
    }

    /// Force the controller into a known state
    ///
    /// The datasheet reset idiom: the 8-bit function-set high nibble
    /// three times unconditionally lands the controller in 8-bit mode
    /// whatever half-finished transfer it was in, then a single 4-bit
    /// nibble commits it to nibble transfers. Strictly ordered; the
    /// full-byte setup instructions only work after the commit.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        // Power-on settle
        self.bus.delay_ms(50);

        for _ in 0..3 {
            self.bus
                .send_nibble((cmd::FUNCTION_SET | cmd::FUNC_8BIT_BUS) >> 4, Target::Command)?;
            self.bus.delay_ms(5);
        }

        self.bus
            .send_nibble((cmd::FUNCTION_SET | cmd::FUNC_4BIT_BUS) >> 4, Target::Command)?;
        self.bus.delay_ms(2);

        let setup = [
            cmd::FUNCTION_SET | cmd::FUNC_4BIT_BUS | cmd::FUNC_2_LINES | cmd::FUNC_5X8_DOTS,
            cmd::CLEAR_DISPLAY,
            cmd::RETURN_HOME,
            cmd::DISPLAY_CONTROL | self.control.bits(),
            cmd::ENTRY_MODE_SET | self.entry.bits(),
        ];
        for instruction in setup {
            self.bus.send_byte(instruction, Target::Command)?;
            self.bus.delay_ms(2);
        }
        Ok(())
    }

    /// Write one character at the current position
    ///
    /// The controller moves its own address counter per the entry mode;
    /// the software model steps the same way.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), I2C::Error> {
        self.bus.send_byte(byte, Target::Data)?;

        if self.entry.increment {
            self.cursor.advance();
        } else {
            self.cursor.retreat();
        }
        Ok(())
    }

    /// Write a run of characters starting at the current position
    pub fn write_buffer(&mut self, buf: &[u8]) -> Result<(), I2C::Error> {
        for &byte in buf {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Program a custom glyph into pattern memory
    ///
    /// `slot` selects one of the 8 CGRAM cells; values above 7 bleed
    /// into the instruction bits and are the caller's problem. Pattern
    /// memory and DDRAM share one address counter, so the DDRAM address
    /// is reissued afterwards or the next character would land in CGRAM.
    pub fn create_char(&mut self, slot: u8, glyph: &[u8; 8]) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::SET_CGRAM_ADDR | (slot << 3), Target::Command)?;

        for &row in glyph {
            self.bus.send_byte(row, Target::Data)?;
        }

        self.write_ddram_addr()
    }

    // Backlight

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.bus.set_backlight(on)
    }

    /// Flip the backlight
    pub fn toggle_backlight(&mut self) -> Result<(), I2C::Error> {
        self.bus.toggle_backlight()
    }

    /// Whether the backlight is on (no bus access)
    pub fn is_backlight_on(&self) -> bool {
        self.bus.is_backlight_on()
    }

    // Entry mode

    /// Cursor moves left after each write
    pub fn set_cursor_auto_dec(&mut self) -> Result<(), I2C::Error> {
        self.entry = EntryModeFlags {
            shift_display: false,
            increment: false,
        };
        self.write_entry_mode()
    }

    /// Cursor moves right after each write
    pub fn set_cursor_auto_inc(&mut self) -> Result<(), I2C::Error> {
        self.entry = EntryModeFlags {
            shift_display: false,
            increment: true,
        };
        self.write_entry_mode()
    }

    /// Display scrolls after each write, text flowing leftward
    ///
    /// The increment-bit pairing for the two display modes is inherited
    /// from the original register table; see `EntryModeFlags::decode`.
    pub fn set_display_auto_dec(&mut self) -> Result<(), I2C::Error> {
        self.entry = EntryModeFlags {
            shift_display: true,
            increment: true,
        };
        self.write_entry_mode()
    }

    /// Display scrolls after each write, text flowing rightward
    pub fn set_display_auto_inc(&mut self) -> Result<(), I2C::Error> {
        self.entry = EntryModeFlags {
            shift_display: true,
            increment: false,
        };
        self.write_entry_mode()
    }

    /// Current entry mode (no bus access)
    pub fn entry_mode(&self) -> EntryMode {
        self.entry.decode()
    }

    // Display control

    /// Clear the whole display
    ///
    /// The controller also resets its address counter to 0, but the
    /// software cursor model deliberately keeps its old value, matching
    /// long-standing driver behavior. Call [`home`](Self::home) (or
    /// [`set_cursor`](Self::set_cursor)) afterwards if the position
    /// matters.
    pub fn clear(&mut self) -> Result<(), I2C::Error> {
        self.bus.send_byte(cmd::CLEAR_DISPLAY, Target::Command)
    }

    /// Switch the display on
    pub fn enable_display(&mut self) -> Result<(), I2C::Error> {
        self.control.display = true;
        self.write_control()
    }

    /// Switch the display off (contents are retained)
    pub fn disable_display(&mut self) -> Result<(), I2C::Error> {
        self.control.display = false;
        self.write_control()
    }

    /// Flip the display on/off state
    pub fn toggle_display(&mut self) -> Result<(), I2C::Error> {
        self.control.display = !self.control.display;
        self.write_control()
    }

    /// Whether the display is on (no bus access)
    pub fn is_display_enabled(&self) -> bool {
        self.control.display
    }

    /// Show the underline cursor
    pub fn enable_cursor(&mut self) -> Result<(), I2C::Error> {
        self.control.underline = true;
        self.write_control()
    }

    /// Hide the underline cursor
    pub fn disable_cursor(&mut self) -> Result<(), I2C::Error> {
        self.control.underline = false;
        self.write_control()
    }

    /// Flip the underline cursor
    pub fn toggle_cursor(&mut self) -> Result<(), I2C::Error> {
        self.control.underline = !self.control.underline;
        self.write_control()
    }

    /// Whether the underline cursor is shown (no bus access)
    pub fn is_cursor_displayed(&self) -> bool {
        self.control.underline
    }

    /// Show the blinking block cursor
    pub fn enable_blink(&mut self) -> Result<(), I2C::Error> {
        self.control.blink = true;
        self.write_control()
    }

    /// Hide the blinking block cursor
    pub fn disable_blink(&mut self) -> Result<(), I2C::Error> {
        self.control.blink = false;
        self.write_control()
    }

    /// Flip the blinking block cursor
    pub fn toggle_blink(&mut self) -> Result<(), I2C::Error> {
        self.control.blink = !self.control.blink;
        self.write_control()
    }

    /// Whether the blinking cursor is shown (no bus access)
    pub fn is_cursor_blinking(&self) -> bool {
        self.control.blink
    }

    // Cursor position

    /// Return the cursor to row 0, column 0
    pub fn home(&mut self) -> Result<(), I2C::Error> {
        self.cursor.home();
        self.bus.send_byte(cmd::RETURN_HOME, Target::Command)
    }

    /// Move the cursor to the given row and column
    ///
    /// Out-of-range input is silently ignored; nothing reaches the bus
    /// and the model keeps its previous position.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), I2C::Error> {
        if !self.cursor.set_position(row, col) {
            return Ok(());
        }
        self.write_ddram_addr()
    }

    /// Shift the cursor one cell left
    pub fn move_left(&mut self) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::SHIFT | cmd::SHIFT_CURSOR_LEFT, Target::Command)?;
        self.cursor.retreat();
        Ok(())
    }

    /// Shift the cursor one cell right
    pub fn move_right(&mut self) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::SHIFT | cmd::SHIFT_CURSOR_RIGHT, Target::Command)?;
        self.cursor.advance();
        Ok(())
    }

    /// Current row (no bus access)
    pub fn cursor_row(&self) -> u8 {
        self.cursor.row()
    }

    /// Current column (no bus access)
    pub fn cursor_col(&self) -> u8 {
        self.cursor.column()
    }

    // Display scrolling

    /// Scroll the display window one cell left
    ///
    /// Scrolling desynchronizes the wraparound assumption of the cursor
    /// model; positions reported afterwards are relative to the
    /// unscrolled window.
    pub fn scroll_left(&mut self) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::SHIFT | cmd::SHIFT_DISPLAY_LEFT, Target::Command)
    }

    /// Scroll the display window one cell right
    pub fn scroll_right(&mut self) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::SHIFT | cmd::SHIFT_DISPLAY_RIGHT, Target::Command)
    }

    // Helpers pushing the software registers to the controller

    fn write_control(&mut self) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::DISPLAY_CONTROL | self.control.bits(), Target::Command)
    }

    fn write_entry_mode(&mut self) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::ENTRY_MODE_SET | self.entry.bits(), Target::Command)
    }

    fn write_ddram_addr(&mut self) -> Result<(), I2C::Error> {
        self.bus
            .send_byte(cmd::SET_DDRAM_ADDR | self.cursor.address(), Target::Command)
    }
}

impl<I2C: I2c, D: DelayNs> CharSink for Hd44780<I2C, D> {
    type Error = I2C::Error;

    /// Newline keeps the column and hops to the other row (two-row
    /// model, so the row is XORed); carriage return rewinds to column 0
    /// of the current row; everything else is display data.
    fn put_char(&mut self, c: u8) -> Result<(), I2C::Error> {
        match c {
            b'\n' => {
                let (row, col) = (self.cursor.row(), self.cursor.column());
                self.set_cursor(row ^ 1, col)
            }
            b'\r' => {
                let row = self.cursor.row();
                self.set_cursor(row, 0)
            }
            _ => self.write_byte(c),
        }
    }
}

impl<I2C: I2c, D: DelayNs> fmt::Write for Hd44780<I2C, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.put_char(byte).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockI2c};

    const EN: u8 = 1 << cmd::EN_BIT;
    const RS: u8 = 1 << cmd::RS_BIT;

    /// Expected wire frames for one full byte, backlight off
    fn byte_frames(byte: u8, rs: u8) -> [u8; 6] {
        let hi = (byte & 0xf0) | rs;
        let lo = ((byte & 0x0f) << 4) | rs;
        [hi, hi | EN, hi, lo, lo | EN, lo]
    }

    fn initialized() -> Hd44780<MockI2c, MockDelay> {
        let mut lcd = Hd44780::new(MockI2c::new(), MockDelay, LcdConfig::default());
        lcd.init().unwrap();
        lcd.bus.i2c_mut().reset();
        lcd
    }

    #[test]
    fn test_init_sequence() {
        let mut lcd = Hd44780::new(MockI2c::new(), MockDelay, LcdConfig::default());
        lcd.init().unwrap();

        let mut expected: heapless::Vec<u8, 64> = heapless::Vec::new();
        // Three 8-bit-mode probes, then the 4-bit commit, nibbles only
        for nibble_frame in [0x30, 0x30, 0x30, 0x20] {
            expected
                .extend_from_slice(&[nibble_frame, nibble_frame | EN, nibble_frame])
                .unwrap();
        }
        // Full setup instructions
        for instruction in [0x28, 0x01, 0x02, 0x0C, 0x06] {
            expected.extend_from_slice(&byte_frames(instruction, 0)).unwrap();
        }

        assert_eq!(lcd.bus.i2c().frames(), &expected[..]);
    }

    #[test]
    fn test_init_applies_cursor_style() {
        let config = LcdConfig {
            cursor: CursorStyle {
                underline: true,
                blink: false,
            },
            ..LcdConfig::default()
        };
        let mut lcd = Hd44780::new(MockI2c::new(), MockDelay, config);
        lcd.init().unwrap();

        let frames = lcd.bus.i2c().frames();
        // Display-control instruction is the second-to-last byte sent
        let control = &frames[frames.len() - 12..frames.len() - 6];
        assert_eq!(control, &byte_frames(0x08 | 0x04 | 0x02, 0));
        assert!(lcd.is_cursor_displayed());
        assert!(!lcd.is_cursor_blinking());
    }

    #[test]
    fn test_write_buffer_advances_in_order() {
        let mut lcd = initialized();
        lcd.write_buffer(b"HI").unwrap();

        let mut expected: heapless::Vec<u8, 16> = heapless::Vec::new();
        expected.extend_from_slice(&byte_frames(b'H', RS)).unwrap();
        expected.extend_from_slice(&byte_frames(b'I', RS)).unwrap();

        assert_eq!(lcd.bus.i2c().frames(), &expected[..]);
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (0, 2));
    }

    #[test]
    fn test_write_byte_respects_decrement_mode() {
        let mut lcd = initialized();
        lcd.set_cursor_auto_dec().unwrap();

        lcd.write_byte(b'X').unwrap();
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (1, 39));
    }

    #[test]
    fn test_create_char_restores_ddram_address() {
        let mut lcd = initialized();
        lcd.set_cursor(1, 5).unwrap();
        lcd.bus.i2c_mut().reset();

        let glyph = [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x00];
        lcd.create_char(3, &glyph).unwrap();

        let mut expected: heapless::Vec<u8, 64> = heapless::Vec::new();
        // CGRAM address for slot 3 is 24
        expected
            .extend_from_slice(&byte_frames(cmd::SET_CGRAM_ADDR | 24, 0))
            .unwrap();
        for row in glyph {
            expected.extend_from_slice(&byte_frames(row, RS)).unwrap();
        }
        // DDRAM pointer reissued for row 1, column 5
        expected
            .extend_from_slice(&byte_frames(cmd::SET_DDRAM_ADDR | 0x45, 0))
            .unwrap();

        assert_eq!(lcd.bus.i2c().frames(), &expected[..]);
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (1, 5));
    }

    #[test]
    fn test_control_bits_share_one_write() {
        let mut lcd = initialized();
        lcd.enable_cursor().unwrap();
        lcd.bus.i2c_mut().reset();

        lcd.enable_blink().unwrap();

        // One instruction write carrying display, cursor and blink bits
        assert_eq!(
            lcd.bus.i2c().frames(),
            &byte_frames(cmd::DISPLAY_CONTROL | 0x04 | 0x02 | 0x01, 0)
        );
    }

    #[test]
    fn test_toggle_display() {
        let mut lcd = initialized();
        assert!(lcd.is_display_enabled());

        lcd.toggle_display().unwrap();
        assert!(!lcd.is_display_enabled());

        lcd.toggle_display().unwrap();
        assert!(lcd.is_display_enabled());
    }

    #[test]
    fn test_set_cursor_rejects_silently() {
        let mut lcd = initialized();
        lcd.set_cursor(1, 7).unwrap();
        lcd.bus.i2c_mut().reset();

        lcd.set_cursor(2, 0).unwrap();
        lcd.set_cursor(0, 41).unwrap();

        assert!(lcd.bus.i2c().frames().is_empty());
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (1, 7));
    }

    #[test]
    fn test_entry_mode_reporting() {
        let mut lcd = initialized();
        assert_eq!(lcd.entry_mode(), EntryMode::CursorInc);

        lcd.set_display_auto_inc().unwrap();
        assert_eq!(lcd.entry_mode(), EntryMode::DisplayInc);

        lcd.set_display_auto_dec().unwrap();
        assert_eq!(lcd.entry_mode(), EntryMode::DisplayDec);

        lcd.set_cursor_auto_dec().unwrap();
        assert_eq!(lcd.entry_mode(), EntryMode::CursorDec);
    }

    #[test]
    fn test_move_wraps_at_origin() {
        let mut lcd = initialized();
        lcd.move_left().unwrap();
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (1, 39));

        lcd.move_right().unwrap();
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (0, 0));
    }

    #[test]
    fn test_home_resets_model_and_hardware() {
        let mut lcd = initialized();
        lcd.set_cursor(1, 12).unwrap();
        lcd.bus.i2c_mut().reset();

        lcd.home().unwrap();
        assert_eq!(lcd.bus.i2c().frames(), &byte_frames(cmd::RETURN_HOME, 0));
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (0, 0));
    }

    #[test]
    fn test_sink_newline_swaps_row_keeps_column() {
        let mut lcd = initialized();
        lcd.set_cursor(0, 7).unwrap();

        lcd.put_char(b'\n').unwrap();
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (1, 7));

        lcd.put_char(b'\n').unwrap();
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (0, 7));
    }

    #[test]
    fn test_sink_carriage_return_rewinds_column() {
        let mut lcd = initialized();
        lcd.set_cursor(1, 13).unwrap();

        lcd.put_char(b'\r').unwrap();
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (1, 0));
    }

    #[test]
    fn test_sink_reads_nothing() {
        let mut lcd = initialized();
        assert_eq!(lcd.get_char(), None);
    }

    #[test]
    fn test_fmt_write_goes_through_sink() {
        use core::fmt::Write;

        let mut lcd = initialized();
        write!(lcd, "T={}\rC", 42).unwrap();

        // "T=42" advanced to column 4, then \r rewound, then 'C'
        assert_eq!((lcd.cursor_row(), lcd.cursor_col()), (0, 1));
    }
}
