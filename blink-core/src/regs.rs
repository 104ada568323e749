//! The four memory-mapped registers the blinker touches.

use core::ptr;

use crate::pin::Port;

pub const RCC_BASE: usize = 0x4002_3800;

const AHB1ENR_OFFSET: usize = 0x30;
const MODER_OFFSET: usize = 0x00;
const OSPEEDR_OFFSET: usize = 0x08;
const ODR_OFFSET: usize = 0x14;

/// `MODER` field value for general purpose output.
pub const MODE_OUTPUT: u32 = 0b01;
/// `OSPEEDR` field value for the fastest slew rate.
pub const SPEED_VERY_HIGH: u32 = 0b11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// `RCC_AHB1ENR`, peripheral clock enable for the GPIO banks.
    Ahb1Enr,
    /// `GPIOx_MODER`, two bits per pin.
    Moder(Port),
    /// `GPIOx_OSPEEDR`, two bits per pin.
    Ospeedr(Port),
    /// `GPIOx_ODR`, one bit per pin.
    Odr(Port),
}

impl Register {
    pub const fn address(self) -> usize {
        match self {
            Register::Ahb1Enr => RCC_BASE + AHB1ENR_OFFSET,
            Register::Moder(port) => port.base() + MODER_OFFSET,
            Register::Ospeedr(port) => port.base() + OSPEEDR_OFFSET,
            Register::Odr(port) => port.base() + ODR_OFFSET,
        }
    }

    /// The GPIO bank this register belongs to, if any.
    pub const fn port(self) -> Option<Port> {
        match self {
            Register::Ahb1Enr => None,
            Register::Moder(port) | Register::Ospeedr(port) | Register::Odr(port) => Some(port),
        }
    }
}

/// Word-wide access to peripheral registers.
pub trait RegisterMap {
    fn read(&self, reg: Register) -> u32;

    fn write(&mut self, reg: Register, value: u32);

    /// Read-modify-write.
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

impl<T: RegisterMap + ?Sized> RegisterMap for &mut T {
    fn read(&self, reg: Register) -> u32 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u32) {
        (**self).write(reg, value)
    }
}

/// Volatile access to the real peripheral bus.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Must run on an STM32F4 and the caller must own the `RCC` and GPIO
    /// register blocks for as long as the returned value lives.
    pub const unsafe fn new() -> Self {
        Mmio { _private: () }
    }
}

impl RegisterMap for Mmio {
    fn read(&self, reg: Register) -> u32 {
        // SAFETY: every `Register` address is an aligned, always-mapped
        // peripheral word and `Mmio::new` established exclusive ownership.
        unsafe { ptr::read_volatile(reg.address() as *const u32) }
    }

    fn write(&mut self, reg: Register, value: u32) {
        // SAFETY: see `read`.
        unsafe { ptr::write_volatile(reg.address() as *mut u32, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_match_reference_manual() {
        assert_eq!(Register::Ahb1Enr.address(), 0x4002_3830);
        assert_eq!(Register::Moder(Port::A).address(), 0x4002_0000);
        assert_eq!(Register::Ospeedr(Port::A).address(), 0x4002_0008);
        assert_eq!(Register::Odr(Port::A).address(), 0x4002_0014);
        assert_eq!(Register::Odr(Port::D).address(), 0x4002_0C14);
    }

    #[test]
    fn rcc_is_not_gpio() {
        assert_eq!(Register::Ahb1Enr.port(), None);
        assert_eq!(Register::Odr(Port::G).port(), Some(Port::G));
    }
}
