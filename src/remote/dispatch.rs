//! Dispatch Loop
//!
//! The single control flow of the firmware. Each cycle polls every button
//! through its debouncer, transmits the command bound to each new press,
//! waits out the poll interval and finally checks the escape hatch.
//!
//! Presses that start and end while a frame is on the air are not seen.
//! Inputs are not queued.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;

use super::debounce::{ButtonLatches, Latch};
use super::keymap::Keymap;
use super::keypad::{EscapeHatch, Keypad};
use crate::config::{INTER_FRAME_GAP_MS, POLL_INTERVAL_MS};
use crate::error::{Error, Result};
use crate::ir::frame::IrTransmitter;
use crate::types::{Button, IrCommand};

/// Irreversible hand-off to the bootloader
pub trait Bootloader {
    /// Leave the application. Never returns.
    fn enter(&mut self) -> !;
}

/// Outcome of one dispatch cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    /// Keep polling
    Continue,
    /// Escape hatch is held: hand control to the bootloader
    EnterBootloader,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Cycle {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Continue => defmt::write!(f, "Continue"),
            Self::EnterBootloader => defmt::write!(f, "EnterBootloader"),
        }
    }
}

/// Commands due for transmission after one poll
pub type Activations = Vec<(Button, IrCommand), { Button::COUNT }>;

/// Debounce state plus keymap: the pure half of the dispatch loop
#[derive(Clone, Debug)]
pub struct Dispatcher {
    latches: ButtonLatches,
    keymap: Keymap,
}

impl Dispatcher {
    /// Create a dispatcher with every button idle
    #[must_use]
    pub const fn new(keymap: Keymap) -> Self {
        Self {
            latches: ButtonLatches::new(),
            keymap,
        }
    }

    /// Sample every button once, in polling order
    ///
    /// Returns the commands bound to buttons that went from released to
    /// pressed since the previous poll. Every line is read before any latch
    /// moves, so a failed read leaves the debounce state untouched.
    pub fn poll<F>(&mut self, mut is_pressed: F) -> Result<Activations>
    where
        F: FnMut(Button) -> Result<bool>,
    {
        let mut pressed = [false; Button::COUNT];
        for button in Button::ALL {
            pressed[button.index()] = is_pressed(button)?;
        }

        Ok(Button::ALL
            .into_iter()
            .filter(|button| self.latches.poll(*button, pressed[button.index()]))
            .map(|button| (button, self.keymap.command(button)))
            .collect())
    }

    /// Debounce state of `button`
    #[must_use]
    pub const fn latch(&self, button: Button) -> Latch {
        self.latches.latch(button)
    }

    /// Active keymap
    #[must_use]
    pub const fn keymap(&self) -> &Keymap {
        &self.keymap
    }
}

/// The whole remote: inputs, transmitter and the loop tying them together
pub struct Remote<P, D, I, B> {
    transmitter: IrTransmitter<P, D>,
    keypad: Keypad<I>,
    escape: EscapeHatch<I>,
    bootloader: B,
    dispatcher: Dispatcher,
    poll_interval_ms: u32,
}

impl<P, D, I, B> Remote<P, D, I, B>
where
    P: OutputPin,
    D: DelayNs,
    I: InputPin,
    B: Bootloader,
{
    /// Assemble the remote with the default poll interval
    #[must_use]
    pub fn new(
        transmitter: IrTransmitter<P, D>,
        keypad: Keypad<I>,
        escape: EscapeHatch<I>,
        bootloader: B,
        keymap: Keymap,
    ) -> Self {
        Self {
            transmitter,
            keypad,
            escape,
            bootloader,
            dispatcher: Dispatcher::new(keymap),
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }

    /// Override the delay between cycles
    #[must_use]
    pub fn with_poll_interval_ms(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Run one cycle: poll, transmit new presses, wait, check the escape hatch
    ///
    /// The wait and the escape hatch check happen even when polling or a
    /// transmission failed. A held escape hatch wins over any earlier error;
    /// otherwise the first error of the cycle is returned.
    pub fn step(&mut self) -> Result<Cycle> {
        let keypad = &mut self.keypad;
        let outcome = self
            .dispatcher
            .poll(|button| keypad.is_pressed(button))
            .and_then(|activations| self.transmit_all(&activations));

        self.transmitter.wait_ms(self.poll_interval_ms);

        if self.escape.is_active()? {
            if let Err(error) = outcome {
                report(error);
            }
            return Ok(Cycle::EnterBootloader);
        }
        outcome.map(|()| Cycle::Continue)
    }

    /// Send every activation, separated by [`INTER_FRAME_GAP_MS`]
    ///
    /// A failed transmission does not stop the rest: each press already
    /// latched gets its one attempt.
    fn transmit_all(&mut self, activations: &Activations) -> Result<()> {
        let mut first_error = None;
        for (i, &(_, command)) in activations.iter().enumerate() {
            if i > 0 {
                self.transmitter.wait_ms(INTER_FRAME_GAP_MS);
            }

            #[cfg(feature = "embedded")]
            defmt::debug!("sending {}", command);

            if let Err(error) = self.transmitter.transmit(command) {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Poll forever; only the escape hatch leaves this loop
    pub fn run(mut self) -> ! {
        loop {
            match self.step() {
                Ok(Cycle::Continue) => {}
                Ok(Cycle::EnterBootloader) => {
                    #[cfg(feature = "embedded")]
                    defmt::info!("escape hatch held, entering bootloader");

                    self.bootloader.enter();
                }
                Err(error) => report(error),
            }
        }
    }

    /// Debounce state of `button`
    #[must_use]
    pub const fn latch(&self, button: Button) -> Latch {
        self.dispatcher.latch(button)
    }
}

#[cfg(feature = "embedded")]
fn report(error: Error) {
    defmt::warn!("dispatch cycle failed: {}", error);
}

#[cfg(not(feature = "embedded"))]
fn report(_: Error) {}
