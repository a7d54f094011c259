//! Scancode set 1 layouts.

/// Number of distinct press scancodes (the release bit excluded).
pub const SCANCODE_COUNT: usize = 128;

/// A pair of scancode-to-ASCII tables, one per shift state.
///
/// A zero entry means the key produces no character.
#[derive(Debug)]
pub struct ScancodeTable {
    unshifted: [u8; SCANCODE_COUNT],
    shifted: [u8; SCANCODE_COUNT],
}

impl ScancodeTable {
    /// Looks up the ASCII byte for a press scancode.
    ///
    /// Returns 0 for unmapped keys and for codes outside the table.
    pub fn lookup(&self, scancode: u8, shifted: bool) -> u8 {
        let table = if shifted {
            &self.shifted
        } else {
            &self.unshifted
        };
        table.get(usize::from(scancode)).copied().unwrap_or(0)
    }
}

/// US QWERTY layout.
pub static US_QWERTY: ScancodeTable = ScancodeTable {
    unshifted: UNSHIFTED,
    shifted: SHIFTED,
};

/// Characters produced without shift.
const UNSHIFTED: [u8; SCANCODE_COUNT] = [
    // 0x00: Esc, number row, backspace
    0, 0x1b, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', b'\x08',
    // 0x0f: Tab, top letter row, enter
    b'\t', b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n',
    // 0x1d: Control, home row
    0, b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', b'`',
    // 0x2a: Left shift, bottom row, right shift
    0, b'\\', b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.', b'/', 0,
    // 0x37: Keypad *, Alt, space, caps lock, F1-F10
    b'*', 0, b' ', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x45: Num/scroll lock, keypad
    0, 0, 0, 0, 0, b'-', 0, 0, 0, b'+', 0, 0, 0, 0, 0,
    // 0x54: F11, F12 and the rest
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Characters produced while shift is held.
const SHIFTED: [u8; SCANCODE_COUNT] = [
    // 0x00: Esc, number row, backspace
    0, 0x1b, b'!', b'@', b'#', b'$', b'%', b'^', b'&', b'*', b'(', b')', b'_', b'+', b'\x08',
    // 0x0f: Tab, top letter row, enter
    b'\t', b'Q', b'W', b'E', b'R', b'T', b'Y', b'U', b'I', b'O', b'P', b'{', b'}', b'\n',
    // 0x1d: Control, home row
    0, b'A', b'S', b'D', b'F', b'G', b'H', b'J', b'K', b'L', b':', b'"', b'~',
    // 0x2a: Left shift, bottom row, right shift
    0, b'|', b'Z', b'X', b'C', b'V', b'B', b'N', b'M', b'<', b'>', b'?', 0,
    // 0x37: Keypad *, Alt, space, caps lock, F1-F10
    b'*', 0, b' ', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x45: Num/scroll lock, keypad
    0, 0, 0, 0, 0, b'-', 0, 0, 0, b'+', 0, 0, 0, 0, 0,
    // 0x54: F11, F12 and the rest
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
