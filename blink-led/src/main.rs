#![no_std]
#![no_main]

use blink_core::{BlinkConfig, Blinker, Mmio, Port, regs};
use cortex_m_rt::entry;
#[cfg(not(feature = "defmt"))]
use panic_halt as _;
use stm32f4xx_hal::pac;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

#[cfg(not(feature = "long-delay"))]
const CONFIG: BlinkConfig = BlinkConfig::NUCLEO;
#[cfg(feature = "long-delay")]
const CONFIG: BlinkConfig = BlinkConfig::NUCLEO.with_delay(blink_core::config::LONG_DELAY);

#[entry]
fn main() -> ! {
    // Claim the device peripherals so nothing else aliases RCC or the GPIO banks
    let _dp = pac::Peripherals::take().unwrap();

    debug_assert_eq!(pac::RCC::ptr() as usize, regs::RCC_BASE);
    debug_assert_eq!(pac::GPIOA::ptr() as usize, Port::A.base());

    #[cfg(feature = "defmt")]
    defmt::info!(
        "blinking {} every {} iterations",
        CONFIG.pin,
        CONFIG.delay_iterations
    );

    // SAFETY: `_dp` is the only handle to the peripherals and is never dropped.
    let regs = unsafe { Mmio::new() };

    Blinker::init(regs, CONFIG.pin, CONFIG.delay()).run()
}
