//! Terminal subsystem for MiniOS.
//!
//! Provides a command-line interface with keyboard input handling.
//!
//! # Architecture
//!
//! - `shell`: Command-line shell with input handling
//! - `commands`: Built-in shell commands
//!
//! [`Terminal`] owns one of each component and runs the whole
//! keystroke path, scancode to screen, inside a single call.

pub mod commands;
pub mod shell;

pub use commands::Command;
pub use shell::Shell;

use crate::console::ScreenConsole;
use crate::keyboard::{self, KeyboardDriver};
use minios_hal::{PortIo, TextBuffer};

/// The console, keyboard decoder and shell of one machine.
pub struct Terminal<B, P> {
    console: ScreenConsole<B, P>,
    keyboard: KeyboardDriver,
    shell: Shell,
}

impl<B: TextBuffer, P: PortIo> Terminal<B, P> {
    /// Create a new terminal on top of `console`.
    pub fn new(console: ScreenConsole<B, P>) -> Self {
        Self {
            console,
            keyboard: KeyboardDriver::new(),
            shell: Shell::new(),
        }
    }

    /// Clears the screen and starts the shell.
    ///
    /// Must run once, before keyboard interrupts are enabled.
    pub fn start(&mut self) {
        self.console.clear();
        self.shell.init(&mut self.console);
    }

    /// Services one keyboard interrupt.
    ///
    /// Reads the pending scancode from the keyboard controller and feeds it
    /// through [`on_scancode`](Self::on_scancode).
    pub fn handle_irq(&mut self) {
        let scancode = keyboard::read_scancode(self.console.ports_mut());
        self.on_scancode(scancode);
    }

    /// Decodes `scancode` and hands any resulting character to the shell.
    pub fn on_scancode(&mut self, scancode: u8) {
        if let Some(c) = self.keyboard.decode(scancode) {
            self.shell.handle_input(c, &mut self.console);
        }
    }

    /// The screen console.
    pub fn console(&self) -> &ScreenConsole<B, P> {
        &self.console
    }

    /// Mutable access to the screen console.
    pub fn console_mut(&mut self) -> &mut ScreenConsole<B, P> {
        &mut self.console
    }

    /// The keyboard decoder.
    pub fn keyboard(&self) -> &KeyboardDriver {
        &self.keyboard
    }

    /// The shell.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }
}
