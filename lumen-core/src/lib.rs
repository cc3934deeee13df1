//! Board-agnostic model of the HD44780 LCD controller
//!
//! This crate contains everything about the controller that can be
//! reasoned about without touching a bus:
//!
//! - Instruction set constants and wire bit layout
//! - Display-control and entry-mode register state
//! - DDRAM cursor address model (two-line wraparound arithmetic)
//! - Character sink trait for formatted output
//!
//! The actual transport (PCF8574 backpack framing, timing) lives in
//! `lumen-lcd`.

#![no_std]
#![deny(unsafe_code)]

pub mod cmd;
pub mod control;
pub mod cursor;
pub mod sink;

// Re-export key types
pub use control::{CursorStyle, DisplayControl, EntryMode, EntryModeFlags};
pub use cursor::CursorAddress;
pub use sink::CharSink;
