//! Pauses between toggles.

use core::hint::black_box;

/// Blocks the caller between two toggles.
///
/// A hardware timer can implement this in place of [`BusyWait`] without
/// touching the toggle logic.
pub trait Delay {
    fn pause(&mut self);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn pause(&mut self) {
        (**self).pause()
    }
}

/// Instruction-count delay: counts from zero up to `iterations`.
///
/// Wall-clock duration scales with the core clock; no frequency is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusyWait {
    iterations: u32,
}

impl BusyWait {
    pub const fn new(iterations: u32) -> Self {
        BusyWait { iterations }
    }

    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Runs the counting loop and returns the final counter value.
    pub fn spin(&self) -> u32 {
        let mut count: u32 = 0;
        while count < self.iterations {
            count = black_box(count) + 1;
        }
        count
    }
}

impl Delay for BusyWait {
    fn pause(&mut self) {
        self.spin();
    }
}
