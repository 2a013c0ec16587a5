//! Pin access errors
//!
//! The transmitter is open-loop, so the only failures are the ones the
//! `embedded-hal` pin drivers report. On the STM32 target those are all
//! `Infallible`.

use embedded_hal::digital::ErrorKind;

use crate::types::Button;

/// Failure while driving or reading a GPIO line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Writing the IR emitter line failed
    Emitter(ErrorKind),
    /// Reading a keymap button line failed
    Button(Button, ErrorKind),
    /// Reading the bootloader escape-hatch line failed
    EscapeHatch(ErrorKind),
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Emitter(kind) => write!(f, "IR emitter write failed: {kind}"),
            Self::Button(button, kind) => {
                write!(f, "{} read failed: {kind}", button.label())
            }
            Self::EscapeHatch(kind) => write!(f, "escape hatch read failed: {kind}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Emitter(kind) => defmt::write!(f, "Emitter({})", defmt::Debug2Format(kind)),
            Self::Button(button, kind) => {
                defmt::write!(f, "Button({}, {})", button, defmt::Debug2Format(kind));
            }
            Self::EscapeHatch(kind) => {
                defmt::write!(f, "EscapeHatch({})", defmt::Debug2Format(kind));
            }
        }
    }
}
