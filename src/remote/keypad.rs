//! Button and escape-hatch inputs
//!
//! All lines are active low with pull-ups: a pressed button reads 0.

use embedded_hal::digital::{Error as _, InputPin};

use crate::error::{Error, Result};
use crate::types::Button;

/// The four keymap button lines
pub struct Keypad<I> {
    /// Indexed by [`Button::index`]
    lines: [I; Button::COUNT],
}

impl<I: InputPin> Keypad<I> {
    /// Create a keypad from lines ordered SW2, SW3, SW4, SW5
    #[must_use]
    pub fn new(lines: [I; Button::COUNT]) -> Self {
        Self { lines }
    }

    /// Check if `button` is pressed (line low)
    pub fn is_pressed(&mut self, button: Button) -> Result<bool> {
        self.lines[button.index()]
            .is_low()
            .map_err(|e| Error::Button(button, e.kind()))
    }
}

/// SW1: held low to hand control to the bootloader
pub struct EscapeHatch<I> {
    pin: I,
}

impl<I: InputPin> EscapeHatch<I> {
    /// Create the escape hatch input
    #[must_use]
    pub fn new(pin: I) -> Self {
        Self { pin }
    }

    /// Check if the escape hatch is pulled low
    pub fn is_active(&mut self) -> Result<bool> {
        self.pin.is_low().map_err(|e| Error::EscapeHatch(e.kind()))
    }
}
