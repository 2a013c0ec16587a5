//! Bit Encoder
//!
//! Maps logical bits to carrier bursts and gaps. One encoder serves both
//! protocols; the [`Protocol`] tag selects pulse-width (Sony) or
//! pulse-distance (Sharp) timing from [`ProtocolTiming`](super::timing::ProtocolTiming).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::carrier::CarrierGenerator;
use crate::error::Result;
use crate::types::{BitOrder, Protocol};

/// Iterator over the bits of a field in transmission order
///
/// Bits above `width` are never produced, so oversized values are
/// truncated rather than rejected.
#[derive(Clone, Debug)]
pub struct FieldBits {
    value: u8,
    width: u8,
    order: BitOrder,
    sent: u8,
}

impl Iterator for FieldBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.sent >= self.width {
            return None;
        }
        let shift = match self.order {
            BitOrder::LsbFirst => self.sent,
            BitOrder::MsbFirst => self.width - 1 - self.sent,
        };
        self.sent += 1;
        Some((self.value >> shift) & 1 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::from(self.width - self.sent);
        (left, Some(left))
    }
}

impl ExactSizeIterator for FieldBits {}

/// Bits of the low `width` bits of `value` in the given order
#[must_use]
pub fn field_bits(value: u8, width: u8, order: BitOrder) -> FieldBits {
    FieldBits {
        value,
        width: width.min(8),
        order,
        sent: 0,
    }
}

/// Protocol-aware bit encoder on top of a carrier generator
pub struct BitEncoder<P, D> {
    carrier: CarrierGenerator<P, D>,
}

impl<P, D> BitEncoder<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Wrap a carrier generator
    #[must_use]
    pub fn new(carrier: CarrierGenerator<P, D>) -> Self {
        Self { carrier }
    }

    /// Emit one bit: a burst followed by the gap the protocol prescribes
    pub fn encode_bit(&mut self, protocol: Protocol, bit: bool) -> Result<()> {
        let (burst, gap_us) = protocol.timing().bit(bit);
        self.carrier.burst(burst)?;
        self.carrier.silence_us(gap_us);
        Ok(())
    }

    /// Emit the low `width` bits of `value` in `order`
    pub fn encode_field(
        &mut self,
        protocol: Protocol,
        value: u8,
        width: u8,
        order: BitOrder,
    ) -> Result<()> {
        for bit in field_bits(value, width, order) {
            self.encode_bit(protocol, bit)?;
        }
        Ok(())
    }

    /// Emit the protocol's leader burst and its gap (no-op for Sharp)
    pub fn encode_start(&mut self, protocol: Protocol) -> Result<()> {
        let timing = protocol.timing();
        if let Some(burst) = timing.start_burst() {
            self.carrier.burst(burst)?;
            self.carrier.silence_us(timing.start_gap_us);
        }
        Ok(())
    }

    /// Emit the protocol's terminating burst (no-op for Sony)
    pub fn encode_stop(&mut self, protocol: Protocol) -> Result<()> {
        if let Some(burst) = protocol.timing().stop_burst() {
            self.carrier.burst(burst)?;
        }
        Ok(())
    }

    /// Keep the LED dark for `ms` milliseconds
    pub fn silence_ms(&mut self, ms: u32) {
        self.carrier.silence_ms(ms);
    }

    /// Unwrap the carrier generator
    pub fn release(self) -> CarrierGenerator<P, D> {
        self.carrier
    }
}
