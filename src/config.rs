//! Compile-time settings

use embedded_hal::digital::PinState;
use fugit::{HertzU32, MillisDurationU32};

/// Console symbol rate
pub const BAUD_RATE: HertzU32 = HertzU32::from_raw(115_200);

/// Time spent in each level before switching
pub const HALF_PERIOD: MillisDurationU32 = MillisDurationU32::from_ticks(500);

/// Line reported after the LED is driven low
pub const LOW_LINE: &str = "LOW";

/// Line reported after the LED is driven high
pub const HIGH_LINE: &str = "HIGH";

/// Console text for a pin level.
pub const fn label(level: PinState) -> &'static str {
    match level {
        PinState::Low => LOW_LINE,
        PinState::High => HIGH_LINE,
    }
}
