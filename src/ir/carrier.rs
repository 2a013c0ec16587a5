//! Carrier Generator
//!
//! Produces bursts of square-wave pulses on the IR LED by bit-banging the
//! output pin with busy-wait delays. A burst is never interrupted: the
//! receiver's demodulator needs an unbroken carrier train.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin};

use crate::error::{Error, Result};

/// Nanoseconds per second
const NS_PER_S: u32 = 1_000_000_000;

/// Carrier waveform: frequency plus the high and low phase lengths
///
/// The phases do not have to be equal. What matters is that their sum stays
/// close to the nominal period, since the error accumulates over every pulse
/// in a burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carrier {
    /// Nominal carrier frequency in Hz
    frequency_hz: u32,
    /// LED-on phase in nanoseconds
    high_ns: u32,
    /// LED-off phase in nanoseconds
    low_ns: u32,
}

impl Carrier {
    /// Accepted deviation of the phase sum from the nominal period (3 %)
    pub const TOLERANCE_PPM: u32 = 30_000;

    /// 38 kHz carrier (Sharp, NEC and most others), ~26.3 µs period
    pub const KHZ_38: Self = Self::from_frequency(38_000);

    /// 40 kHz carrier (Sony), 25 µs period
    pub const KHZ_40: Self = Self::from_frequency(40_000);

    /// Square wave at `frequency_hz` with the period split as evenly as
    /// nanosecond resolution allows
    #[must_use]
    pub const fn from_frequency(frequency_hz: u32) -> Self {
        let period = NS_PER_S / frequency_hz;
        let high_ns = (period + 1) / 2;
        Self {
            frequency_hz,
            high_ns,
            low_ns: period - high_ns,
        }
    }

    /// Carrier with explicitly trimmed phases
    ///
    /// Used when the pin toggle overhead has been measured on a scope and
    /// the phases shortened to compensate.
    #[must_use]
    pub const fn with_phases(frequency_hz: u32, high_ns: u32, low_ns: u32) -> Self {
        Self {
            frequency_hz,
            high_ns,
            low_ns,
        }
    }

    /// Nominal frequency in Hz
    #[must_use]
    pub const fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// LED-on phase in nanoseconds
    #[must_use]
    pub const fn high_ns(&self) -> u32 {
        self.high_ns
    }

    /// LED-off phase in nanoseconds
    #[must_use]
    pub const fn low_ns(&self) -> u32 {
        self.low_ns
    }

    /// Actual period produced (high + low)
    #[must_use]
    pub const fn period_ns(&self) -> u32 {
        self.high_ns + self.low_ns
    }

    /// Period implied by the nominal frequency
    #[must_use]
    pub const fn nominal_period_ns(&self) -> u32 {
        NS_PER_S / self.frequency_hz
    }

    /// Deviation of the actual period from the nominal one, in ppm
    #[must_use]
    pub const fn error_ppm(&self) -> u32 {
        let nominal = self.nominal_period_ns();
        let diff = self.period_ns().abs_diff(nominal);
        ((diff as u64 * 1_000_000) / nominal as u64) as u32
    }

    /// Check the phase sum against [`Carrier::TOLERANCE_PPM`]
    #[must_use]
    pub const fn is_within_tolerance(&self) -> bool {
        self.error_ppm() <= Self::TOLERANCE_PPM
    }

    /// Total length of a burst of `pulses` cycles
    #[must_use]
    pub const fn burst_ns(&self, pulses: u16) -> u32 {
        pulses as u32 * self.period_ns()
    }
}

/// A carrier burst waiting to be emitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseBurst {
    /// Carrier to modulate with
    pub carrier: Carrier,
    /// Number of carrier cycles
    pub pulses: u16,
}

impl PulseBurst {
    /// Create a burst
    #[must_use]
    pub const fn new(carrier: Carrier, pulses: u16) -> Self {
        Self { carrier, pulses }
    }

    /// Time the burst occupies the emitter
    #[must_use]
    pub const fn duration_ns(&self) -> u32 {
        self.carrier.burst_ns(self.pulses)
    }
}

/// Bit-banged carrier on an IR LED output
///
/// Owns the LED pin and the delay provider. The pin must start low; every
/// burst leaves it low again.
pub struct CarrierGenerator<P, D> {
    led: P,
    delay: D,
}

impl<P, D> CarrierGenerator<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a generator on an LED pin that is already driven low
    #[must_use]
    pub fn new(led: P, delay: D) -> Self {
        Self { led, delay }
    }

    /// Emit `burst.pulses` carrier cycles, blocking for the whole burst
    pub fn burst(&mut self, burst: PulseBurst) -> Result<()> {
        let PulseBurst { carrier, pulses } = burst;
        for _ in 0..pulses {
            self.led.set_high().map_err(|e| Error::Emitter(e.kind()))?;
            self.delay.delay_ns(carrier.high_ns());
            self.led.set_low().map_err(|e| Error::Emitter(e.kind()))?;
            self.delay.delay_ns(carrier.low_ns());
        }
        Ok(())
    }

    /// Keep the LED dark for `us` microseconds
    pub fn silence_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    /// Keep the LED dark for `ms` milliseconds
    pub fn silence_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the pin and the delay provider
    pub fn release(self) -> (P, D) {
        (self.led, self.delay)
    }
}
