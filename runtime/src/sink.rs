//! Provides the output sink written to by the replace driver.

use std::convert::Infallible;

/// An append-only destination for replaced text.
///
/// The driver only ever appends, in order, and never reads back from the
/// sink. Anything written before an error is returned stays written.
pub trait Sink {
    type Error;

    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_bytes(&[byte])
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_bytes(s.as_bytes())
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

/// Raw bytes are decoded lossily, invalid sequences are written as
/// `U+FFFD`.
impl Sink for String {
    type Error = Infallible;

    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.push_str(&String::from_utf8_lossy(buf));
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.push_str(s);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(buf)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }
}

/// Adapts any [std::io::Write] into a [Sink].
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: std::io::Write> IoSink<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(buf)
    }
}
