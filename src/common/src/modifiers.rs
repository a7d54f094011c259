//! Keyboard modifier state.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys tracked by the keyboard decoder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key is held down.
        const SHIFT     = 1 << 0;
        /// Caps lock is latched on.
        const CAPS_LOCK = 1 << 1;
    }
}

impl Modifiers {
    /// Returns true while a shift key is held.
    pub const fn shift_pressed(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    /// Returns true while caps lock is on.
    pub const fn caps_lock(self) -> bool {
        self.contains(Modifiers::CAPS_LOCK)
    }
}
