//! GPIO banks and pins.

use core::fmt;

use crate::error::Error;

/// Number of pins in one GPIO bank.
pub const PINS_PER_PORT: u8 = 16;

const GPIO_BASE: usize = 0x4002_0000;
const GPIO_STRIDE: usize = 0x400;

/// A GPIO bank on the AHB1 bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Port {
    pub const ALL: [Port; 8] = [
        Port::A,
        Port::B,
        Port::C,
        Port::D,
        Port::E,
        Port::F,
        Port::G,
        Port::H,
    ];

    const fn number(self) -> usize {
        self as usize
    }

    /// Start of this bank's register block.
    pub const fn base(self) -> usize {
        GPIO_BASE + GPIO_STRIDE * self.number()
    }

    /// This bank's clock-enable bit in `RCC_AHB1ENR` (`GPIOAEN` is bit 0).
    pub const fn clock_enable_mask(self) -> u32 {
        1 << self.number()
    }

    const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

/// One pin of a GPIO bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    port: Port,
    index: u8,
}

impl Pin {
    /// User LED LD2 on Nucleo-64 boards.
    pub const PA5: Pin = Pin { port: Port::A, index: 5 };

    pub const fn new(port: Port, index: u8) -> Result<Self, Error> {
        if index < PINS_PER_PORT {
            Ok(Pin { port, index })
        } else {
            Err(Error::InvalidPin(index))
        }
    }

    pub const fn port(self) -> Port {
        self.port
    }

    pub const fn index(self) -> u8 {
        self.index
    }

    /// Mask of this pin's bit in one-bit-per-pin registers (`ODR`).
    pub const fn mask(self) -> u32 {
        1 << self.index
    }

    /// Offset of this pin's field in two-bits-per-pin registers (`MODER`, `OSPEEDR`).
    pub const fn field_shift(self) -> u32 {
        2 * self.index as u32
    }

    /// Mask covering this pin's two-bit field.
    pub const fn field_mask(self) -> u32 {
        0b11 << self.field_shift()
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port.letter(), self.index)
    }
}
