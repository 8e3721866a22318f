//! Error types

use core::fmt;

use embedded_hal::digital::ErrorKind;

/// Result type for blinker operations
pub type Result<T> = core::result::Result<T, Error>;

/// Blinker errors
///
/// None of these are recoverable; the firmware halts on any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Console cannot run at the requested rate (Hz)
    UnsupportedBaud(u32),
    /// Console written before `begin`
    SinkNotReady,
    /// Console rejected the bytes
    SinkWrite,
    /// Indicator line could not be configured as an output
    LineConfig,
    /// Pin driver reported an error
    LineWrite(ErrorKind),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBaud(hz) => write!(f, "unsupported baud rate: {}", hz),
            Self::SinkNotReady => write!(f, "log sink not initialized"),
            Self::SinkWrite => write!(f, "log sink write failed"),
            Self::LineConfig => write!(f, "indicator line configuration failed"),
            Self::LineWrite(kind) => write!(f, "indicator line write failed: {}", kind),
        }
    }
}
