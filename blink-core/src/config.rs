//! Compile-time blink settings.

use crate::delay::BusyWait;
use crate::pin::Pin;

/// Busy-wait length of the helper-function variant.
pub const SHORT_DELAY: u32 = 10_000;
/// Busy-wait length of the inline-loop variant.
pub const LONG_DELAY: u32 = 50_000_000;

/// Which pin to blink and how long to wait between toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pub pin: Pin,
    pub delay_iterations: u32,
}

impl BlinkConfig {
    /// Nucleo-64 user LED.
    pub const NUCLEO: BlinkConfig = BlinkConfig::new(Pin::PA5, SHORT_DELAY);

    pub const fn new(pin: Pin, delay_iterations: u32) -> Self {
        BlinkConfig {
            pin,
            delay_iterations,
        }
    }

    pub const fn with_delay(self, delay_iterations: u32) -> Self {
        BlinkConfig {
            delay_iterations,
            ..self
        }
    }

    pub const fn delay(&self) -> BusyWait {
        BusyWait::new(self.delay_iterations)
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::NUCLEO
    }
}
