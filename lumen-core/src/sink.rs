//! Character sink trait for formatted output
//!
//! A display driver implements this so that a formatted-output layer can
//! push text one byte at a time without knowing anything about the bus.
//! This replaces base-class inheritance from a stream type: the only
//! capability the output layer needs is a single-byte write.

/// Byte-at-a-time text sink
pub trait CharSink {
    /// Error type for sink writes
    type Error;

    /// Write one byte to the sink
    ///
    /// Control bytes (`\n`, `\r`) may be interpreted by the sink rather
    /// than displayed.
    fn put_char(&mut self, c: u8) -> Result<(), Self::Error>;

    /// Read one byte back from the sink
    ///
    /// Display sinks are write-only; the default always reports nothing
    /// available.
    fn get_char(&mut self) -> Option<u8> {
        None
    }
}
