//! Host-side test doubles
//!
//! A recording LED pin and delay that share one event trace, a decoder
//! that turns the trace back into carrier marks and spaces, and scriptable
//! input lines.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

use ir_remote::remote::dispatch::Bootloader;

/// Something that happened on the emitter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// LED switched on
    High,
    /// LED switched off
    Low,
    /// Busy-wait of the given length in nanoseconds
    Wait(u64),
}

/// Shared log written by [`MockLed`] and [`MockDelay`]
#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn led(&self) -> MockLed {
        MockLed(self.clone())
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay(self.clone())
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Total time covered by the trace
    pub fn total_ns(&self) -> u64 {
        self.0
            .borrow()
            .iter()
            .map(|e| match e {
                Event::Wait(ns) => *ns,
                _ => 0,
            })
            .sum()
    }

    pub fn segments(&self) -> Vec<Segment> {
        decode(&self.events())
    }
}

/// Recording IR LED
pub struct MockLed(Trace);

impl ErrorType for MockLed {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::High);
        Ok(())
    }
}

/// Recording delay
pub struct MockDelay(Trace);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::Wait(u64::from(ns)));
    }
}

/// LED pin whose driver always fails
pub struct BrokenLed;

impl ErrorType for BrokenLed {
    type Error = ErrorKind;
}

impl OutputPin for BrokenLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// One stretch of the decoded waveform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Carrier burst
    Mark { pulses: u32, ns: u64 },
    /// LED dark
    Space { ns: u64 },
}

impl Segment {
    pub fn pulses(&self) -> Option<u32> {
        match self {
            Self::Mark { pulses, .. } => Some(*pulses),
            Self::Space { .. } => None,
        }
    }

    pub fn space_ns(&self) -> Option<u64> {
        match self {
            Self::Space { ns } => Some(*ns),
            Self::Mark { .. } => None,
        }
    }
}

/// Group carrier cycles (High, Wait, Low, Wait) into marks and the
/// remaining waits into spaces
pub fn decode(events: &[Event]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    let mut i = 0;
    while i < events.len() {
        match events[i] {
            Event::High => {
                let cycle_ns = match events.get(i + 1..i + 4) {
                    Some([Event::Wait(high), Event::Low, Event::Wait(low)]) => high + low,
                    other => panic!("malformed carrier cycle at {i}: {other:?}"),
                };
                match out.last_mut() {
                    Some(Segment::Mark { pulses, ns }) => {
                        *pulses += 1;
                        *ns += cycle_ns;
                    }
                    _ => out.push(Segment::Mark {
                        pulses: 1,
                        ns: cycle_ns,
                    }),
                }
                i += 4;
            }
            Event::Wait(wait) => {
                match out.last_mut() {
                    Some(Segment::Space { ns }) => *ns += wait,
                    _ => out.push(Segment::Space { ns: wait }),
                }
                i += 1;
            }
            Event::Low => i += 1,
        }
    }
    out
}

/// Marks only, in order
pub fn marks(segments: &[Segment]) -> Vec<u32> {
    segments.iter().filter_map(Segment::pulses).collect()
}

/// A decoded Sony frame
#[derive(Debug, PartialEq, Eq)]
pub struct SonyFrame {
    pub leader_pulses: u32,
    pub bits: Vec<bool>,
}

/// Read Sony frames: a 96-pulse leader starts each one, then 24/48-pulse
/// marks are 0/1
pub fn sony_frames(segments: &[Segment]) -> Vec<SonyFrame> {
    let mut frames: Vec<SonyFrame> = Vec::new();
    for pulses in marks(segments) {
        match pulses {
            96 => frames.push(SonyFrame {
                leader_pulses: pulses,
                bits: Vec::new(),
            }),
            24 | 48 => frames
                .last_mut()
                .expect("data bit before leader")
                .bits
                .push(pulses == 48),
            other => panic!("unexpected Sony mark of {other} pulses"),
        }
    }
    frames
}

/// Gap separating a Sharp zero from a one
const SHARP_BIT_THRESHOLD_NS: u64 = 1_180_000;

/// Gap long enough to end a Sharp sub-frame
const SHARP_FRAME_GAP_NS: u64 = 10_000_000;

/// Read Sharp sub-frames: each mark is a bit decided by the gap after it,
/// the mark before a long gap (or the end of the trace) is the stop burst
pub fn sharp_sub_frames(segments: &[Segment]) -> Vec<Vec<bool>> {
    let mut frames = Vec::new();
    let mut bits = Vec::new();
    for (k, segment) in segments.iter().enumerate() {
        let Segment::Mark { pulses, .. } = segment else {
            continue;
        };
        assert_eq!(*pulses, 12, "Sharp marks are always 12 pulses");
        match segments.get(k + 1).and_then(Segment::space_ns) {
            Some(gap) if gap < SHARP_FRAME_GAP_NS => bits.push(gap > SHARP_BIT_THRESHOLD_NS),
            _ => frames.push(std::mem::take(&mut bits)),
        }
    }
    assert!(bits.is_empty(), "trailing Sharp bits without stop burst");
    frames
}

/// Bits of `value` low `width` bits, LSB first
pub fn lsb_first(value: u8, width: u8) -> Vec<bool> {
    (0..width).map(|i| (value >> i) & 1 == 1).collect()
}

/// Bits of `value` low `width` bits, MSB first
pub fn msb_first(value: u8, width: u8) -> Vec<bool> {
    (0..width).rev().map(|i| (value >> i) & 1 == 1).collect()
}

/// Parse a "0110" style literal
pub fn bits(literal: &str) -> Vec<bool> {
    literal
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => false,
            '1' => true,
            other => panic!("not a bit: {other}"),
        })
        .collect()
}

/// Scriptable active-low input line
#[derive(Clone, Default)]
pub struct Line {
    pressed: Rc<Cell<bool>>,
    broken: Rc<Cell<bool>>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
    }

    pub fn break_line(&self) {
        self.broken.set(true);
    }

    pub fn repair(&self) {
        self.broken.set(false);
    }
}

impl ErrorType for Line {
    type Error = ErrorKind;
}

impl InputPin for Line {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        if self.broken.get() {
            Err(ErrorKind::Other)
        } else {
            Ok(self.pressed.get())
        }
    }
}

/// Bootloader that panics so tests can observe the hand-off
pub struct PanicBootloader;

impl Bootloader for PanicBootloader {
    fn enter(&mut self) -> ! {
        panic!("entered bootloader")
    }
}
