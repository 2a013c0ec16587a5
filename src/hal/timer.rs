//! Timer Abstractions
//!
//! Busy-wait delay calibrated against the core clock. Used for carrier
//! phases, bit gaps and the dispatch loop's poll interval alike; the
//! processor does nothing else while it spins.
//!
//! Each delay call is shortened by a fixed overhead so that a carrier phase
//! (pin write plus spin) lasts as long as requested.

#[cfg(feature = "embedded")]
use embedded_hal::delay::DelayNs;

/// Spin delay counting core clock cycles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleDelay {
    /// Core clock in Hz
    sysclk_hz: u32,
    /// Cycles spent per call outside the spin
    overhead_cycles: u32,
}

impl CycleDelay {
    /// Create a delay for a core running at `sysclk_hz`, without overhead
    /// compensation
    #[must_use]
    pub const fn new(sysclk_hz: u32) -> Self {
        Self {
            sysclk_hz,
            overhead_cycles: 0,
        }
    }

    /// Subtract `cycles` from every delay
    #[must_use]
    pub const fn with_overhead_cycles(mut self, cycles: u32) -> Self {
        self.overhead_cycles = cycles;
        self
    }

    /// Core clock cycles covering `ns` nanoseconds (rounded down)
    #[must_use]
    pub const fn cycles_for_ns(&self, ns: u32) -> u32 {
        ((ns as u64 * self.sysclk_hz as u64) / 1_000_000_000) as u32
    }

    /// Cycles actually spun for a request of `ns`: the clock cycles minus the
    /// overhead, never below zero
    #[must_use]
    pub const fn spin_cycles(&self, ns: u32) -> u32 {
        self.cycles_for_ns(ns).saturating_sub(self.overhead_cycles)
    }
}

#[cfg(feature = "embedded")]
impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay(self.spin_cycles(ns));
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for CycleDelay {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "CycleDelay({}Hz, -{} cycles/call)",
            self.sysclk_hz,
            self.overhead_cycles
        );
    }
}
