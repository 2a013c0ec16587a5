//! Hardware Abstraction Layer
//!
//! Target-only glue between the generic protocol core and the STM32G474:
//! a cycle-counted delay for the carrier and the bootloader hand-off.

#[cfg(feature = "embedded")]
pub mod reset;
pub mod timer;
