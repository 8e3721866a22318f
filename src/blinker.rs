//! Periodic indicator toggler
//!
//! [`Blinker`] drives the indicator line through a two-phase cycle, LOW then
//! HIGH. Each phase writes the pin, reports the new level on the console and
//! then blocks for [`HALF_PERIOD`].

use core::{
    convert::Infallible,
    sync::atomic::{AtomicBool, Ordering},
};

use embedded_hal::{
    delay::DelayNs,
    digital::{Error as _, OutputPin, PinState},
};
use log::{debug, trace};

use crate::{
    config::{label, BAUD_RATE, HALF_PERIOD},
    error::{Error, Result},
    sink::LogSink,
};

/// Owns the indicator line, the console and the delay source.
///
/// # Invariants
///
/// - The console is initialized at [`BAUD_RATE`] before the line is configured
///   and before any line of text is written
/// - A level is always written to the pin before it is reported
/// - Only whole cycles are run; a cycle ends with the line HIGH
pub struct Blinker<P, S, D> {
    line: P,
    sink: S,
    delay: D,
    cycles: u32,
}

impl<P, S, D> Blinker<P, S, D>
where
    P: OutputPin,
    S: LogSink,
    D: DelayNs,
{
    /// Bring up the console, configure the indicator line and return a
    /// blinker ready to run.
    ///
    /// `configure_line` turns the board's indicator pin into an output. It is
    /// called once, after the console is up.
    ///
    /// # Errors
    ///
    /// Returns the console's `begin` error, or whatever `configure_line`
    /// reports. Both are fatal startup errors.
    pub fn setup<F>(mut sink: S, configure_line: F, delay: D) -> Result<Self>
    where
        F: FnOnce() -> Result<P>,
    {
        sink.begin(BAUD_RATE)?;
        let line = configure_line()?;
        debug!(
            "blinker ready: {} baud, {} ms half period",
            BAUD_RATE.to_Hz(),
            HALF_PERIOD.to_millis()
        );

        Ok(Self {
            line,
            sink,
            delay,
            cycles: 0,
        })
    }

    /// Drive the line to `level`, report it, then sleep for the half period.
    pub fn transition(&mut self, level: PinState) -> Result<()> {
        self.line
            .set_state(level)
            .map_err(|e| Error::LineWrite(e.kind()))?;
        self.sink.write_line(label(level))?;
        trace!("line {}", label(level));
        self.delay.delay_ms(HALF_PERIOD.ticks());
        Ok(())
    }

    /// One full LOW/HIGH cycle.
    pub fn cycle(&mut self) -> Result<()> {
        self.transition(PinState::Low)?;
        self.transition(PinState::High)?;
        self.cycles = self.cycles.wrapping_add(1);
        Ok(())
    }

    /// Blink forever.
    ///
    /// Only returns if the line or the console fails.
    pub fn run(mut self) -> Result<Infallible> {
        loop {
            self.cycle()?;
        }
    }

    /// Run exactly `cycles` cycles.
    pub fn run_cycles(&mut self, cycles: u32) -> Result<()> {
        for _ in 0..cycles {
            self.cycle()?;
        }
        Ok(())
    }

    /// Run whole cycles until `stop` is set, returning how many ran.
    ///
    /// `stop` is checked between cycles only.
    pub fn run_until(&mut self, stop: &AtomicBool) -> Result<u32> {
        let mut ran = 0u32;
        while !stop.load(Ordering::Acquire) {
            self.cycle()?;
            ran = ran.wrapping_add(1);
        }
        debug!("blinker stopped after {} cycles", ran);
        Ok(ran)
    }

    /// Completed cycles since setup
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Give back the line, console and delay.
    pub fn release(self) -> (P, S, D) {
        (self.line, self.sink, self.delay)
    }
}
