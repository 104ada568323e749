//! Register-level LED blinker for STM32F4 parts.
//!
//! The blink routine never touches memory-mapped I/O directly: it drives a
//! [`RegisterMap`], which is [`Mmio`] on the device and [`SimRegisters`] in
//! tests.
//!
//! # Usage
//! ```
//! use blink_core::{Blinker, BusyWait, Pin, SimRegisters};
//!
//! let mut led = Blinker::init(SimRegisters::new(), Pin::PA5, BusyWait::new(10));
//! led.step();
//! assert!(led.is_set());
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod blink;
pub mod config;
pub mod delay;
pub mod error;
pub mod pin;
pub mod regs;
pub mod sim;

pub use blink::Blinker;
pub use config::BlinkConfig;
pub use delay::{BusyWait, Delay};
pub use error::Error;
pub use pin::{Pin, Port};
pub use regs::{Mmio, Register, RegisterMap};
pub use sim::SimRegisters;
