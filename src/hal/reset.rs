//! Bootloader hand-off
//!
//! The STM32 ROM bootloader is reached through a system reset with BOOT0
//! strapped; the application only has to reset the core.

use crate::remote::dispatch::Bootloader;

/// Leaves the application through `SCB::sys_reset`
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemReset;

impl Bootloader for SystemReset {
    fn enter(&mut self) -> ! {
        cortex_m::peripheral::SCB::sys_reset()
    }
}
