//! Protocol Timing
//!
//! Carrier, burst lengths and gaps for each supported protocol, expressed
//! as data so the encoders can stay protocol-agnostic.
//!
//! Values are the ones measured against the target TVs. The Sharp gaps in
//! particular should be re-checked on a scope before changing them.

use super::carrier::{Carrier, PulseBurst};
use crate::types::Protocol;

/// How a bit value is expressed on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modulation {
    /// Burst length carries the bit, the gap after it is constant (Sony)
    PulseWidth {
        /// Carrier cycles for a 0
        zero_pulses: u16,
        /// Carrier cycles for a 1
        one_pulses: u16,
        /// Gap after every bit in microseconds
        gap_us: u32,
    },
    /// Burst length is constant, the gap after it carries the bit (Sharp)
    PulseDistance {
        /// Carrier cycles for every bit
        pulses: u16,
        /// Gap after a 0 in microseconds
        zero_gap_us: u32,
        /// Gap after a 1 in microseconds
        one_gap_us: u32,
    },
}

/// Complete timing description of one protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolTiming {
    /// Carrier modulating every burst
    pub carrier: Carrier,
    /// Bit encoding
    pub modulation: Modulation,
    /// Leader burst in carrier cycles, sent before the first data bit
    pub start_pulses: Option<u16>,
    /// Gap after the leader burst in microseconds
    pub start_gap_us: u32,
    /// Terminating burst in carrier cycles, sent after the last bit
    pub stop_pulses: Option<u16>,
    /// Silence between the normal and the complemented frame in milliseconds
    pub repeat_gap_ms: Option<u32>,
}

/// Sony SIRC (12-bit) on 40 kHz
pub const SONY_TIMING: ProtocolTiming = ProtocolTiming {
    carrier: Carrier::KHZ_40,
    modulation: Modulation::PulseWidth {
        zero_pulses: 24,
        one_pulses: 48,
        gap_us: 600,
    },
    start_pulses: Some(96),
    start_gap_us: 600,
    stop_pulses: None,
    repeat_gap_ms: None,
};

/// Sharp on 38 kHz
///
/// 12 pulses is ~316 µs, the nearest whole count to the 320 µs mark.
pub const SHARP_TIMING: ProtocolTiming = ProtocolTiming {
    carrier: Carrier::KHZ_38,
    modulation: Modulation::PulseDistance {
        pulses: 12,
        zero_gap_us: 680,
        one_gap_us: 1680,
    },
    start_pulses: None,
    start_gap_us: 0,
    stop_pulses: Some(12),
    repeat_gap_ms: Some(40),
};

impl Protocol {
    /// Timing parameters for this protocol
    #[must_use]
    pub const fn timing(self) -> &'static ProtocolTiming {
        match self {
            Self::Sony => &SONY_TIMING,
            Self::Sharp => &SHARP_TIMING,
        }
    }
}

impl ProtocolTiming {
    /// Burst and trailing gap (µs) encoding one bit
    #[must_use]
    pub const fn bit(&self, bit: bool) -> (PulseBurst, u32) {
        match self.modulation {
            Modulation::PulseWidth {
                zero_pulses,
                one_pulses,
                gap_us,
            } => {
                let pulses = if bit { one_pulses } else { zero_pulses };
                (PulseBurst::new(self.carrier, pulses), gap_us)
            }
            Modulation::PulseDistance {
                pulses,
                zero_gap_us,
                one_gap_us,
            } => {
                let gap = if bit { one_gap_us } else { zero_gap_us };
                (PulseBurst::new(self.carrier, pulses), gap)
            }
        }
    }

    /// Leader burst, if the protocol has one
    #[must_use]
    pub const fn start_burst(&self) -> Option<PulseBurst> {
        match self.start_pulses {
            Some(pulses) => Some(PulseBurst::new(self.carrier, pulses)),
            None => None,
        }
    }

    /// Terminating burst, if the protocol has one
    #[must_use]
    pub const fn stop_burst(&self) -> Option<PulseBurst> {
        match self.stop_pulses {
            Some(pulses) => Some(PulseBurst::new(self.carrier, pulses)),
            None => None,
        }
    }
}
