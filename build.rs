//! Build script for the IR remote firmware
//!
//! Handles:
//! - Memory layout configuration
//! - defmt linker script for target builds

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host test builds link against std and need no linker scripts
    if std::env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    // memory.x is generated by embassy-stm32's `memory-x` feature
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
