//! x86_64 architecture support.
//!
//! Provides port I/O, VGA text memory, serial logging and interrupt
//! handling for x86_64 platforms, plus the one kernel [`Terminal`].

pub mod interrupts;
pub mod pic;
pub mod port;
pub mod serial;
pub mod vga;

pub use port::HardwarePorts;
pub use serial::SERIAL;
pub use vga::VgaBuffer;

use crate::console::ScreenConsole;
use crate::terminal::Terminal;
use spin::Mutex;

/// The terminal driven by the keyboard interrupt.
pub type KernelTerminal = Terminal<VgaBuffer, HardwarePorts>;

/// Global terminal instance.
///
/// Created and started by the boot path before interrupts are enabled;
/// afterwards only the keyboard handler locks it.
pub static TERMINAL: spin::Once<Mutex<KernelTerminal>> = spin::Once::new();

/// Creates the global terminal and starts its shell.
///
/// Idempotent - later calls return the existing terminal untouched.
pub fn init_terminal() -> &'static Mutex<KernelTerminal> {
    TERMINAL.call_once(|| {
        let mut terminal = Terminal::new(ScreenConsole::new(VgaBuffer::new(), HardwarePorts));
        terminal.start();
        Mutex::new(terminal)
    })
}

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after boot and after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
