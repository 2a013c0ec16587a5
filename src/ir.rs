//! Infrared Signal Generation
//!
//! Turns an [`IrCommand`](crate::types::IrCommand) into carrier bursts on
//! the IR LED. Layered bottom-up: the carrier generator toggles the pin,
//! the bit encoder maps one bit to a burst plus a gap, and the frame
//! transmitter assembles whole Sony or Sharp frames.

pub mod carrier;
pub mod timing;
pub mod encoder;
pub mod frame;
