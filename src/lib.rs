//! IR Remote Control Transmitter Library
//!
//! This library drives an infrared LED with carrier-modulated pulse trains
//! that encode button presses in the Sony (SIRC) and Sharp television
//! remote-control formats.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Dispatch Loop  │  Keymap  │  Input Debouncer                │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    PROTOCOL LAYER                            │
//! │  Frame Transmitter  │  Bit Encoder  │  Protocol Timing       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    SIGNAL LAYER                              │
//! │  Carrier Generator (busy-wait square wave on the IR LED)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 HAL (embedded-hal 1.0 traits)                │
//! │  OutputPin  │  InputPin  │  DelayNs  │  system reset         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything above the HAL layer is generic over `embedded-hal` traits and
//! builds on the host with `--no-default-features --features std`.
//!
//! # Timing model
//!
//! There is no scheduler. All timing is busy-wait: a Sharp transmission blocks
//! the caller for roughly 80 ms and button edges during that window are not seen.

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_stm32;

/// Hardware Abstraction Layer
///
/// Calibrated spin delay and the bootloader/reset path for the STM32G474.
/// Only the delay arithmetic builds on the host.
pub mod hal;

/// Infrared signal generation
///
/// Carrier generator, bit encoders and frame assembly for Sony and Sharp.
pub mod ir;

/// Remote control logic
///
/// Button debouncing, keymaps and the dispatch loop.
pub mod remote;

/// Known remote-control codes for the supported TVs
pub mod codes;

/// Error type for pin access failures
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::error::{Error, Result};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal::digital::{InputPin, OutputPin};

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
