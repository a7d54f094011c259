//! PS/2 keyboard scancode decoder.
//!
//! Turns one raw set-1 scancode at a time into at most one ASCII character,
//! tracking shift and caps lock along the way. Nothing is queued: the IRQ1
//! handler decodes and consumes each scancode before returning.

pub mod layout;

use layout::{ScancodeTable, US_QWERTY};
use minios_common::Modifiers;
use minios_hal::PortIo;

/// Keyboard controller data port.
pub const KEYBOARD_DATA_PORT: u16 = 0x60;

/// Set on a scancode when the key is released.
pub const RELEASE_BIT: u8 = 0x80;

/// Left shift press scancode.
pub const LEFT_SHIFT: u8 = 0x2A;

/// Right shift press scancode.
pub const RIGHT_SHIFT: u8 = 0x36;

/// Caps lock press scancode.
pub const CAPS_LOCK: u8 = 0x3A;

/// Reads the pending scancode from the keyboard controller.
pub fn read_scancode<P: PortIo>(ports: &mut P) -> u8 {
    ports.read_u8(KEYBOARD_DATA_PORT)
}

/// Scancode decoder with modifier state.
#[derive(Debug)]
pub struct KeyboardDriver {
    layout: &'static ScancodeTable,
    modifiers: Modifiers,
}

impl KeyboardDriver {
    /// Creates a decoder for the US QWERTY layout with no modifiers active.
    pub fn new() -> Self {
        Self::with_layout(&US_QWERTY)
    }

    /// Creates a decoder for the given layout.
    pub const fn with_layout(layout: &'static ScancodeTable) -> Self {
        Self {
            layout,
            modifiers: Modifiers::empty(),
        }
    }

    /// Current modifier state.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Decodes one scancode.
    ///
    /// Releases never produce a character; they only matter for shift.
    /// Shift and caps lock presses update the modifier state. Any other
    /// press is looked up in the layout and case-folded for caps lock.
    pub fn decode(&mut self, scancode: u8) -> Option<char> {
        if scancode & RELEASE_BIT != 0 {
            let code = scancode & !RELEASE_BIT;
            if is_shift(code) {
                self.modifiers.remove(Modifiers::SHIFT);
            }
            return None;
        }

        if is_shift(scancode) {
            self.modifiers.insert(Modifiers::SHIFT);
            return None;
        }
        if scancode == CAPS_LOCK {
            self.modifiers.toggle(Modifiers::CAPS_LOCK);
            return None;
        }

        let shift = self.modifiers.shift_pressed();
        let caps = self.modifiers.caps_lock();
        let mut ascii = self.layout.lookup(scancode, shift);

        // Caps lock only inverts letters that shift left uppercase.
        if caps && ascii.is_ascii_lowercase() {
            ascii = ascii.to_ascii_uppercase();
        } else if caps && ascii.is_ascii_uppercase() && shift {
            ascii = ascii.to_ascii_lowercase();
        }

        if ascii == 0 {
            log::trace!("scancode {:#04x} produces no character", scancode);
            return None;
        }
        Some(char::from(ascii))
    }
}

impl Default for KeyboardDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn is_shift(code: u8) -> bool {
    code == LEFT_SHIFT || code == RIGHT_SHIFT
}
