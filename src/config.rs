//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the IR remote hardware.
//! Pin mappings, clock frequency, polling cadence and the button mapping are
//! centralized here. Nothing is configurable at runtime or persisted.

use crate::codes::{sharp, sony};
use crate::remote::keymap::Keymap;
use crate::types::Button;

/// Core clock frequency (STM32G474 out of reset: HSI16)
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;

/// Dispatch loop cycle delay in milliseconds
///
/// Longer than typical contact bounce, which is what lets the debouncer
/// get away with a single sample per cycle.
pub const POLL_INTERVAL_MS: u32 = 20;

/// Silence between two frames sent in the same dispatch cycle
///
/// Same as the gap between Sharp sub-frames. Without it a Sharp stop burst
/// runs straight into the next frame's first mark.
pub const INTER_FRAME_GAP_MS: u32 = 40;

/// Core cycles each delay call loses outside the spin itself
///
/// Covers the pin write, the call into the delay and loop bookkeeping,
/// paid once per carrier phase. Estimated from the release build's code;
/// recheck on a scope after changing the clock or the optimisation level.
pub const PHASE_OVERHEAD_CYCLES: u32 = 12;

/// Sharp TV mapping: power, volume up, volume down, menu
pub const SHARP_KEYMAP: Keymap = Keymap::new([
    (Button::Sw2, sharp::POWER),
    (Button::Sw3, sharp::VOLUME_UP),
    (Button::Sw4, sharp::VOLUME_DOWN),
    (Button::Sw5, sharp::MENU),
]);

/// Sony TV mapping: power, volume up, volume down, power
pub const SONY_KEYMAP: Keymap = Keymap::new([
    (Button::Sw2, sony::POWER),
    (Button::Sw3, sony::VOLUME_UP),
    (Button::Sw4, sony::VOLUME_DOWN),
    (Button::Sw5, sony::POWER),
]);

/// Mapping used by the firmware
#[cfg(not(feature = "sony"))]
pub const DEFAULT_KEYMAP: Keymap = SHARP_KEYMAP;

/// Mapping used by the firmware
#[cfg(feature = "sony")]
pub const DEFAULT_KEYMAP: Keymap = SONY_KEYMAP;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments (NUCLEO-G474RE)

    /// IR LED driver transistor
    pub const IR_LED: &str = "PA8";

    /// SW1, bootloader escape hatch (active low)
    pub const SW1_BOOT: &str = "PC13";

    /// SW2 (active low)
    pub const SW2: &str = "PC0";

    /// SW3 (active low)
    pub const SW3: &str = "PC1";

    /// SW4 (active low)
    pub const SW4: &str = "PC2";

    /// SW5 (active low)
    pub const SW5: &str = "PC3";
}
