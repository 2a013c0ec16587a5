//! IR Remote Main Application
//!
//! Entry point for the STM32G474 IR remote firmware.
//! Initializes the pins and hands control to the dispatch loop.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::info;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use {defmt_rtt as _, panic_probe as _};

use ir_remote::config::{self, pins, DEFAULT_KEYMAP, PHASE_OVERHEAD_CYCLES, SYSTEM_CLOCK_HZ};
use ir_remote::hal::reset::SystemReset;
use ir_remote::hal::timer::CycleDelay;
use ir_remote::ir::frame::IrTransmitter;
use ir_remote::remote::dispatch::Remote;
use ir_remote::remote::keypad::{EscapeHatch, Keypad};

/// Main entry point
#[entry]
fn main() -> ! {
    info!("IR Remote Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Reset clock tree (HSI16); CycleDelay is calibrated for it
    let p = embassy_stm32::init(embassy_stm32::Config::default());

    info!("Peripherals initialized");

    // IR LED idles dark
    let led = Output::new(p.PA8, Level::Low, Speed::VeryHigh);

    // Buttons and escape hatch are active low
    let keypad = Keypad::new([
        Input::new(p.PC0, Pull::Up),
        Input::new(p.PC1, Pull::Up),
        Input::new(p.PC2, Pull::Up),
        Input::new(p.PC3, Pull::Up),
    ]);
    let escape = EscapeHatch::new(Input::new(p.PC13, Pull::Up));

    info!(
        "IR LED on {}, buttons on {}/{}/{}/{}, escape hatch on {}",
        pins::IR_LED,
        pins::SW2,
        pins::SW3,
        pins::SW4,
        pins::SW5,
        pins::SW1_BOOT
    );

    let delay = CycleDelay::new(SYSTEM_CLOCK_HZ).with_overhead_cycles(PHASE_OVERHEAD_CYCLES);
    info!("Carrier timing: {}", delay);
    let transmitter = IrTransmitter::new(led, delay);

    for (button, command) in DEFAULT_KEYMAP.iter() {
        info!("{} -> {}", button, command);
    }
    info!("Polling every {} ms", config::POLL_INTERVAL_MS);

    Remote::new(transmitter, keypad, escape, SystemReset, DEFAULT_KEYMAP).run()
}
