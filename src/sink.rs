//! Console output
//!
//! [`LogSink`] is the text channel the blinker reports on. [`FmtSink`] adapts
//! anything implementing [`core::fmt::Write`] (the ESP ROM console printer, a
//! blocking UART, a `String` in tests) into one.

use core::fmt::Write;

use fugit::HertzU32;

use crate::error::{Error, Result};

/// Append-only line-oriented text output
pub trait LogSink {
    /// Bring the channel up at `baud`.
    ///
    /// Must be called before the first [`write_line`](Self::write_line).
    fn begin(&mut self, baud: HertzU32) -> Result<()>;

    /// Write `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Terminator appended to every line
pub const LINE_END: &str = "\r\n";

/// [`LogSink`] over a console that is already clocked at a fixed rate
#[derive(Debug)]
pub struct FmtSink<W> {
    writer: W,
    rate: HertzU32,
    ready: bool,
}

impl<W: Write> FmtSink<W> {
    /// Wrap `writer`, which transmits at `rate`.
    pub fn new(writer: W, rate: HertzU32) -> Self {
        Self {
            writer,
            rate,
            ready: false,
        }
    }

    /// Whether `begin` has succeeded
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LogSink for FmtSink<W> {
    fn begin(&mut self, baud: HertzU32) -> Result<()> {
        if baud != self.rate {
            return Err(Error::UnsupportedBaud(baud.to_Hz()));
        }
        // Repeated begin is harmless
        self.ready = true;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        if !self.ready {
            return Err(Error::SinkNotReady);
        }
        self.writer
            .write_str(line)
            .and_then(|_| self.writer.write_str(LINE_END))
            .map_err(|_| Error::SinkWrite)
    }
}
