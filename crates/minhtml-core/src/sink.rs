//! Output destination for rendered markup.

use std::io;

/// Abstract byte sink the serializer writes into.
///
/// Implemented for every [`io::Write`], so `Vec<u8>`, files, sockets and
/// buffered writers can be rendered into directly. Errors are passed through
/// to the caller as-is.
pub trait Sink {
    /// Append a run of bytes
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Append a single byte
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_bytes(&[byte])
    }

    /// Append a string
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }
}

impl<W: io::Write + ?Sized> Sink for W {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }
}
