//! Remote Control Logic
//!
//! Button handling and the dispatch loop that decides, once per polling
//! cycle, which frame to transmit.

pub mod debounce;
pub mod keypad;
pub mod keymap;
pub mod dispatch;
