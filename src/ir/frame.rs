//! Frame Transmitter
//!
//! Assembles complete Sony and Sharp frames from an [`IrCommand`].
//!
//! # Sony (SIRC-12)
//!
//! ```text
//! START | 7 command bits, LSB first | 5 address bits, LSB first
//! ```
//!
//! # Sharp
//!
//! Two sub-frames separated by a 40 ms gap. The second one repeats the
//! first with command, EXP and CHK complemented so the receiver can check
//! the transmission:
//!
//! ```text
//! addr (5, LSB first) | cmd (8, MSB first)  | EXP=1 | CHK=0 | stop
//!                          ... 40 ms ...
//! addr (5, LSB first) | !cmd (8, MSB first) | EXP=0 | CHK=1 | stop
//! ```
//!
//! The address is sent unchanged in the second sub-frame. Canonical Sharp
//! receivers expect it complemented as well; the TVs this firmware was
//! tuned against accept it as is.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::carrier::CarrierGenerator;
use super::encoder::BitEncoder;
use crate::error::Result;
use crate::types::{IrCommand, Protocol};

/// Sharp expansion bit, uncomplemented
const SHARP_EXP: bool = true;

/// Sharp check bit, uncomplemented
const SHARP_CHK: bool = false;

/// Which half of a Sharp transmission is being sent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubFrame {
    /// Command, EXP and CHK as-is
    Normal,
    /// Command, EXP and CHK complemented
    Inverted,
}

impl SubFrame {
    /// Both sub-frames in transmission order
    pub const SEQUENCE: [Self; 2] = [Self::Normal, Self::Inverted];

    /// XOR mask applied to the command field
    #[must_use]
    pub const fn command_mask(self) -> u8 {
        match self {
            Self::Normal => 0x00,
            Self::Inverted => 0xFF,
        }
    }

    /// Apply this sub-frame's inversion to a fixed trailer bit
    #[must_use]
    pub const fn apply(self, bit: bool) -> bool {
        match self {
            Self::Normal => bit,
            Self::Inverted => !bit,
        }
    }
}

/// Sends complete IR frames on the LED
///
/// Transmission is fire-and-forget: there is no acknowledgement and nothing
/// to retry. A call blocks until the last burst has left the LED.
pub struct IrTransmitter<P, D> {
    encoder: BitEncoder<P, D>,
}

impl<P, D> IrTransmitter<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a transmitter on an LED pin that is already driven low
    #[must_use]
    pub fn new(led: P, delay: D) -> Self {
        Self {
            encoder: BitEncoder::new(CarrierGenerator::new(led, delay)),
        }
    }

    /// Send one command in its protocol's frame format
    pub fn transmit(&mut self, command: IrCommand) -> Result<()> {
        match command.protocol {
            Protocol::Sony => self.transmit_sony(command.address, command.command),
            Protocol::Sharp => self.transmit_sharp(command.address, command.command),
        }
    }

    /// Sony frame: leader, command bits, then address bits
    pub fn transmit_sony(&mut self, address: u8, command: u8) -> Result<()> {
        let protocol = Protocol::Sony;
        self.encoder.encode_start(protocol)?;
        self.encoder.encode_field(
            protocol,
            command,
            protocol.command_bits(),
            protocol.command_order(),
        )?;
        self.encoder.encode_field(
            protocol,
            address,
            protocol.address_bits(),
            protocol.address_order(),
        )
    }

    /// Sharp transmission: normal sub-frame, gap, inverted sub-frame
    pub fn transmit_sharp(&mut self, address: u8, command: u8) -> Result<()> {
        let gap_ms = Protocol::Sharp.timing().repeat_gap_ms.unwrap_or(0);
        for (i, sub_frame) in SubFrame::SEQUENCE.into_iter().enumerate() {
            if i > 0 {
                self.encoder.silence_ms(gap_ms);
            }
            self.transmit_sharp_sub_frame(address, command, sub_frame)?;
        }
        Ok(())
    }

    fn transmit_sharp_sub_frame(
        &mut self,
        address: u8,
        command: u8,
        sub_frame: SubFrame,
    ) -> Result<()> {
        let protocol = Protocol::Sharp;
        self.encoder.encode_field(
            protocol,
            address,
            protocol.address_bits(),
            protocol.address_order(),
        )?;
        self.encoder.encode_field(
            protocol,
            command ^ sub_frame.command_mask(),
            protocol.command_bits(),
            protocol.command_order(),
        )?;
        self.encoder.encode_bit(protocol, sub_frame.apply(SHARP_EXP))?;
        self.encoder.encode_bit(protocol, sub_frame.apply(SHARP_CHK))?;
        self.encoder.encode_stop(protocol)
    }

    /// Block with the LED dark, e.g. between dispatch cycles
    pub fn wait_ms(&mut self, ms: u32) {
        self.encoder.silence_ms(ms);
    }

    /// Give back the LED pin and the delay provider
    pub fn release(self) -> (P, D) {
        self.encoder.release().release()
    }
}
