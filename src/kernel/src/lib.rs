//! MiniOS Kernel
//!
//! The interactive runtime of a bare-metal text console: keyboard scancodes
//! in, an 80x25 text screen and a small command shell out.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `console`: Cell grid, cursor, scrolling and hardware cursor sync
//! - `keyboard`: Scancode decoding with shift and caps lock
//! - `terminal`: The shell, its built-in commands, and the keystroke path
//! - `testutil`: Recording doubles for the hardware seams
//! - `arch`: Platform-specific code (port I/O, VGA, serial, interrupts),
//!   built only for bare metal
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code lives under `arch` and is
//! documented with the invariants that make it sound.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]
#![warn(missing_docs)]

pub mod console;
pub mod keyboard;
pub mod terminal;
pub mod testutil;

#[cfg(target_os = "none")]
pub mod arch;
#[cfg(target_os = "none")]
pub mod logger;

/// Initializes core kernel subsystems.
///
/// Called first in the boot process so that later stages can log.
#[cfg(all(target_os = "none", target_arch = "x86_64"))]
pub fn init() {
    arch::x86_64::serial::init();
    logger::init();
}
