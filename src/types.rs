//! Shared types used across the IR remote firmware
//!
//! This module defines the domain types that flow between the keymap,
//! the dispatch loop and the frame transmitter.

use core::fmt;

/// Remote-control signalling format
///
/// The protocol fixes carrier frequency, bit timing, field widths and frame
/// structure. Timing parameters live in [`crate::ir::timing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Sony SIRC, 12-bit variant: pulse-width modulation on a 40 kHz carrier
    Sony,
    /// Sharp: pulse-distance modulation on a 38 kHz carrier, sent twice
    /// with the second frame complemented
    Sharp,
}

impl Protocol {
    /// All supported protocols
    pub const ALL: [Self; 2] = [Self::Sony, Self::Sharp];

    /// Width of the address (device) field in bits
    #[must_use]
    pub const fn address_bits(self) -> u8 {
        match self {
            Self::Sony | Self::Sharp => 5,
        }
    }

    /// Width of the command (data) field in bits
    #[must_use]
    pub const fn command_bits(self) -> u8 {
        match self {
            Self::Sony => 7,
            Self::Sharp => 8,
        }
    }

    /// Order in which command bits go out on the wire
    ///
    /// Sharp sends its address LSB first but its command MSB first.
    #[must_use]
    pub const fn command_order(self) -> BitOrder {
        match self {
            Self::Sony => BitOrder::LsbFirst,
            Self::Sharp => BitOrder::MsbFirst,
        }
    }

    /// Order in which address bits go out on the wire
    #[must_use]
    pub const fn address_order(self) -> BitOrder {
        BitOrder::LsbFirst
    }

    /// Short display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sony => "Sony",
            Self::Sharp => "Sharp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Protocol {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Bit transmission order within a field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 0 first
    LsbFirst,
    /// Highest bit of the field first
    MsbFirst,
}

/// One remote action: a (protocol, address, command) triple
///
/// Values wider than the protocol's field widths are not rejected; the
/// excess high bits are simply never transmitted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IrCommand {
    /// Signalling format
    pub protocol: Protocol,
    /// Device address
    pub address: u8,
    /// Command code
    pub command: u8,
}

impl IrCommand {
    /// Create a new command
    #[must_use]
    pub const fn new(protocol: Protocol, address: u8, command: u8) -> Self {
        Self {
            protocol,
            address,
            command,
        }
    }

    /// Create a Sony command
    #[must_use]
    pub const fn sony(address: u8, command: u8) -> Self {
        Self::new(Protocol::Sony, address, command)
    }

    /// Create a Sharp command
    #[must_use]
    pub const fn sharp(address: u8, command: u8) -> Self {
        Self::new(Protocol::Sharp, address, command)
    }

    /// Address truncated to the protocol's address width
    #[must_use]
    pub const fn field_address(&self) -> u8 {
        truncate(self.address, self.protocol.address_bits())
    }

    /// Command truncated to the protocol's command width
    #[must_use]
    pub const fn field_command(&self) -> u8 {
        truncate(self.command, self.protocol.command_bits())
    }
}

const fn truncate(value: u8, width: u8) -> u8 {
    if width >= 8 {
        value
    } else {
        value & ((1 << width) - 1)
    }
}

impl fmt::Debug for IrCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IrCommand({}, addr=0x{:02X}, cmd=0x{:02X})",
            self.protocol, self.address, self.command
        )
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for IrCommand {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{}(addr=0x{:02X}, cmd=0x{:02X})",
            self.protocol,
            self.address,
            self.command
        );
    }
}

/// Physical push buttons that trigger transmissions
///
/// Named after the board silkscreen. SW1 is reserved for the bootloader
/// escape hatch and is not a keymap button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// SW2
    Sw2,
    /// SW3
    Sw3,
    /// SW4
    Sw4,
    /// SW5
    Sw5,
}

impl Button {
    /// Number of keymap buttons
    pub const COUNT: usize = 4;

    /// All buttons in polling order
    pub const ALL: [Self; Self::COUNT] = [Self::Sw2, Self::Sw3, Self::Sw4, Self::Sw5];

    /// Position of the button in [`Button::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sw2 => 0,
            Self::Sw3 => 1,
            Self::Sw4 => 2,
            Self::Sw5 => 3,
        }
    }

    /// Silkscreen label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sw2 => "SW2",
            Self::Sw3 => "SW3",
            Self::Sw4 => "SW4",
            Self::Sw5 => "SW5",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Button {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.label());
    }
}
