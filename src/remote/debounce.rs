//! Input Debouncer
//!
//! Per-button edge detector that fires once per press, however long the
//! button is held. There is no multi-sample confirmation: the 20 ms poll
//! interval already outlasts contact bounce.
//!
//! ```text
//!   state     line       next      event
//!   Idle      pressed    Latched   activate
//!   Latched   pressed    Latched   -
//!   Latched   released   Idle      -
//!   Idle      released   Idle      -
//! ```

use crate::types::Button;

/// Whether the current press has already been acted on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Latch {
    /// Released, or never pressed
    #[default]
    Idle,
    /// Pressed and already transmitted
    Latched,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Latch {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "Idle"),
            Self::Latched => defmt::write!(f, "Latched"),
        }
    }
}

/// Single-button debouncer
#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    latch: Latch,
}

impl Debouncer {
    /// Create a debouncer in the [`Latch::Idle`] state
    #[must_use]
    pub const fn new() -> Self {
        Self { latch: Latch::Idle }
    }

    /// Feed one sample of the line, returns true on a new press
    #[must_use = "a true return is the only activation for this press"]
    pub fn poll(&mut self, pressed: bool) -> bool {
        let (next, activate) = match (self.latch, pressed) {
            (Latch::Idle, true) => (Latch::Latched, true),
            (Latch::Latched, true) => (Latch::Latched, false),
            (_, false) => (Latch::Idle, false),
        };
        self.latch = next;
        activate
    }

    /// Current state
    #[must_use]
    pub const fn latch(&self) -> Latch {
        self.latch
    }
}

/// Debouncers for every keymap button
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonLatches {
    debouncers: [Debouncer; Button::COUNT],
}

impl ButtonLatches {
    /// All buttons idle
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debouncers: [Debouncer::new(); Button::COUNT],
        }
    }

    /// Feed one sample for `button`, returns true on a new press
    #[must_use = "a true return is the only activation for this press"]
    pub fn poll(&mut self, button: Button, pressed: bool) -> bool {
        self.debouncers[button.index()].poll(pressed)
    }

    /// Current state of `button`
    #[must_use]
    pub const fn latch(&self, button: Button) -> Latch {
        self.debouncers[button.index()].latch()
    }
}
