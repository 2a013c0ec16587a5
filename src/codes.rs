//! Remote-control code catalogue
//!
//! Address and command values for the supported TVs, captured from the
//! stock remotes.

/// Sony TV (SIRC-12)
pub mod sony {
    use crate::types::IrCommand;

    /// TV device address
    pub const TV: u8 = 0x01;

    /// Power toggle
    pub const POWER: IrCommand = IrCommand::sony(TV, 0x15);

    /// Volume up
    pub const VOLUME_UP: IrCommand = IrCommand::sony(TV, 0x12);

    /// Volume down
    pub const VOLUME_DOWN: IrCommand = IrCommand::sony(TV, 0x13);
}

/// Sharp TV
///
/// Command values are written in transmission order (MSB first).
pub mod sharp {
    use crate::types::IrCommand;

    /// TV device address
    pub const TV: u8 = 0b1_0000;

    /// Power toggle
    pub const POWER: IrCommand = IrCommand::sharp(TV, 0b0110_1000);

    /// Enter / OK.
    ///
    /// Placeholder: transmits command 0 until the real code is filled in.
    // TODO: capture the ENTER code from the stock Sharp remote
    pub const ENTER: IrCommand = IrCommand::sharp(TV, 0b0000_0000);

    /// Cursor up
    pub const UP: IrCommand = IrCommand::sharp(TV, 0b1110_1010);

    /// Cursor right
    pub const RIGHT: IrCommand = IrCommand::sharp(TV, 0b0110_1111);

    /// Cursor down
    pub const DOWN: IrCommand = IrCommand::sharp(TV, 0b0001_1010);

    /// Cursor left
    pub const LEFT: IrCommand = IrCommand::sharp(TV, 0b1010_1111);

    /// Volume up
    pub const VOLUME_UP: IrCommand = IrCommand::sharp(TV, 0b0010_1000);

    /// Volume down
    pub const VOLUME_DOWN: IrCommand = IrCommand::sharp(TV, 0b1010_1000);

    /// Channel up.
    ///
    /// Placeholder: transmits command 0 until the real code is filled in.
    // TODO: capture the CH+ code from the stock Sharp remote
    pub const CHANNEL_UP: IrCommand = IrCommand::sharp(TV, 0b0000_0000);

    /// Channel down.
    ///
    /// Placeholder: transmits command 0 until the real code is filled in.
    // TODO: capture the CH- code from the stock Sharp remote
    pub const CHANNEL_DOWN: IrCommand = IrCommand::sharp(TV, 0b0000_0000);

    /// Menu
    pub const MENU: IrCommand = IrCommand::sharp(TV, 0b0000_0100);
}
