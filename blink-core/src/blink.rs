//! The blink routine.

use crate::delay::Delay;
use crate::pin::Pin;
use crate::regs::{MODE_OUTPUT, Register, RegisterMap, SPEED_VERY_HIGH};

/// A pin configured as a fast push-pull output, toggled by XOR on `ODR`.
///
/// The only way to obtain a `Blinker` is [`Blinker::init`], so the pin is
/// always configured exactly once before it is driven.
pub struct Blinker<R, D> {
    regs: R,
    pin: Pin,
    delay: D,
}

impl<R, D> Blinker<R, D>
where
    R: RegisterMap,
    D: Delay,
{
    /// Enables the bank clock, then sets the pin's mode to output, then its
    /// speed to maximum. Every step ORs into the register so other pins
    /// sharing it keep their configuration.
    pub fn init(mut regs: R, pin: Pin, delay: D) -> Self {
        let port = pin.port();

        regs.modify(Register::Ahb1Enr, |v| v | port.clock_enable_mask());
        regs.modify(Register::Moder(port), |v| {
            v | (MODE_OUTPUT << pin.field_shift())
        });
        regs.modify(Register::Ospeedr(port), |v| {
            v | (SPEED_VERY_HIGH << pin.field_shift())
        });

        debug!("{} configured as output", pin);

        Blinker { regs, pin, delay }
    }

    /// Flips the pin's output level, leaving the rest of `ODR` alone.
    pub fn toggle(&mut self) {
        let mask = self.pin.mask();
        self.regs.modify(Register::Odr(self.pin.port()), |v| v ^ mask);
        trace!("toggle {}", self.pin);
    }

    /// One loop iteration: toggle, then wait.
    pub fn step(&mut self) {
        self.toggle();
        self.delay.pause();
    }

    /// Blinks forever.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Whether the pin's output bit is currently set.
    pub fn is_set(&self) -> bool {
        self.regs.read(Register::Odr(self.pin.port())) & self.pin.mask() != 0
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }

    pub fn registers(&self) -> &R {
        &self.regs
    }

    pub fn into_parts(self) -> (R, D) {
        (self.regs, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::Port;
    use crate::sim::{SimRegisters, Write};

    struct NoDelay;

    impl Delay for NoDelay {
        fn pause(&mut self) {}
    }

    #[test]
    fn init_writes_clock_mode_speed_in_order() {
        let led = Blinker::init(SimRegisters::new(), Pin::PA5, NoDelay);
        let journal: Vec<Write> = led.registers().journal().copied().collect();

        assert_eq!(
            journal,
            [
                Write {
                    register: Register::Ahb1Enr,
                    value: 1
                },
                Write {
                    register: Register::Moder(Port::A),
                    value: 0b01 << 10
                },
                Write {
                    register: Register::Ospeedr(Port::A),
                    value: 0b11 << 10
                },
            ]
        );
        assert_eq!(led.registers().ignored_writes(), 0);
    }

    #[test]
    fn toggle_flips_only_the_pin() {
        let sim = SimRegisters::new().with(Register::Odr(Port::A), 0xA0A0);
        let mut led = Blinker::init(sim, Pin::PA5, NoDelay);

        assert!(led.is_set());
        led.toggle();
        assert!(!led.is_set());
        assert_eq!(led.registers().value(Register::Odr(Port::A)), 0xA080);
    }

    #[test]
    fn step_toggles_then_pauses() {
        struct Count(u32);

        impl Delay for Count {
            fn pause(&mut self) {
                self.0 += 1;
            }
        }

        let mut pauses = Count(0);
        let mut led = Blinker::init(SimRegisters::new(), Pin::PA5, &mut pauses);

        led.step();
        assert!(led.is_set());
        led.step();
        assert!(!led.is_set());

        drop(led);
        assert_eq!(pauses.0, 2);
    }

    #[test]
    fn other_ports_are_untouched() {
        let sim = SimRegisters::new().with(Register::Moder(Port::B), 0x1234_5678);
        let led = Blinker::init(sim, Pin::new(Port::C, 13).unwrap(), NoDelay);
        let (sim, _) = led.into_parts();

        assert_eq!(sim.value(Register::Moder(Port::B)), 0x1234_5678);
        assert_eq!(sim.value(Register::Ahb1Enr), 1 << 2);
        assert_eq!(sim.value(Register::Moder(Port::C)), 0b01 << 26);
    }
}
