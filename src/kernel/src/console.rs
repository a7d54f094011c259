//! Text console on an 80x25 cell display.
//!
//! [`ScreenConsole`] owns the cell grid and the cursor. It writes cells
//! through a [`TextBuffer`] and keeps the CRTC hardware cursor in step
//! through a [`PortIo`], so both can be swapped for test doubles.

use core::fmt;
use minios_hal::{Console, PortIo, TextBuffer};

/// Number of rows in VGA text mode.
pub const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
pub const BUFFER_WIDTH: usize = 80;

/// Columns between tab stops.
pub const TAB_STOP: usize = 4;

/// CRTC index register.
pub const CRTC_INDEX_PORT: u16 = 0x3D4;

/// CRTC data register.
pub const CRTC_DATA_PORT: u16 = 0x3D5;

/// CRTC register holding the high byte of the cursor location.
pub const CURSOR_HIGH_REGISTER: u8 = 14;

/// CRTC register holding the low byte of the cursor location.
pub const CURSOR_LOW_REGISTER: u8 = 15;

/// Foreground/background attribute byte of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// White text on a black background, the only attribute in use.
    pub const WHITE_ON_BLACK: ColorCode = ColorCode(0x0F);

    /// The raw attribute byte.
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

/// A single character cell of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCell {
    /// The character byte.
    pub character: u8,
    /// The attribute byte.
    pub color_code: ColorCode,
}

impl DisplayCell {
    /// An empty cell.
    pub const BLANK: DisplayCell = DisplayCell::new(b' ');

    /// Creates a white-on-black cell.
    pub const fn new(character: u8) -> Self {
        Self {
            character,
            color_code: ColorCode::WHITE_ON_BLACK,
        }
    }

    /// Packs the cell into its 16-bit memory layout.
    pub const fn to_raw(self) -> u16 {
        (self.color_code.as_u8() as u16) << 8 | self.character as u16
    }

    /// Unpacks a cell from its 16-bit memory layout.
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            character: raw as u8,
            color_code: ColorCode((raw >> 8) as u8),
        }
    }
}

/// Text console with a cursor.
///
/// After every public operation the cursor lies inside the grid.
pub struct ScreenConsole<B, P> {
    buffer: B,
    ports: P,
    /// Current column (0 to BUFFER_WIDTH-1).
    cursor_x: usize,
    /// Current row (0 to BUFFER_HEIGHT-1).
    cursor_y: usize,
}

impl<B: TextBuffer, P: PortIo> ScreenConsole<B, P> {
    /// Creates a console over `buffer` with the cursor at the top left.
    ///
    /// Neither the buffer nor the hardware cursor is touched; call
    /// [`clear`](Self::clear) to bring them into a known state.
    pub fn new(buffer: B, ports: P) -> Self {
        Self {
            buffer,
            ports,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    /// Fills the screen with blanks and homes the cursor.
    pub fn clear(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.sync_cursor();
    }

    /// Writes one byte at the cursor.
    ///
    /// `\n`, `\x08` (backspace) and `\t` move the cursor, other bytes below
    /// 0x20 are ignored, and everything else is stored in the cell under the
    /// cursor. The cursor wraps at the right edge and the screen scrolls when
    /// it runs off the bottom.
    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.cursor_x = 0;
                self.cursor_y += 1;
            }
            b'\x08' => {
                if self.cursor_x > 0 {
                    self.cursor_x -= 1;
                    self.write_cell(self.cursor_y, self.cursor_x, DisplayCell::BLANK);
                }
            }
            b'\t' => {
                self.cursor_x = (self.cursor_x + TAB_STOP) & !(TAB_STOP - 1);
            }
            byte if byte >= b' ' => {
                self.write_cell(self.cursor_y, self.cursor_x, DisplayCell::new(byte));
                self.cursor_x += 1;
            }
            _ => {}
        }

        if self.cursor_x >= BUFFER_WIDTH {
            self.cursor_x = 0;
            self.cursor_y += 1;
        }
        if self.cursor_y >= BUFFER_HEIGHT {
            self.scroll();
        }
        self.sync_cursor();
    }

    /// Moves every row up by one, blanks the bottom row and pins the cursor
    /// to it.
    pub fn scroll(&mut self) {
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                let raw = self.buffer.read_cell(row, col);
                self.buffer.write_cell(row - 1, col, raw);
            }
        }
        self.clear_row(BUFFER_HEIGHT - 1);
        self.cursor_y = BUFFER_HEIGHT - 1;
        log::trace!("console scrolled");
    }

    /// Writes every byte of `s` through [`put_char`](Self::put_char).
    pub fn print(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Moves the cursor to `row`, `col` and prints `s` there.
    ///
    /// The cursor is left after the printed text. Out-of-range coordinates
    /// are clamped to the last row or column.
    pub fn print_at(&mut self, s: &str, row: usize, col: usize) {
        self.cursor_x = col.min(BUFFER_WIDTH - 1);
        self.cursor_y = row.min(BUFFER_HEIGHT - 1);
        self.print(s);
    }

    /// Moves the cursor, clamping to the grid, and updates the hardware
    /// cursor.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor_x = x.min(BUFFER_WIDTH - 1);
        self.cursor_y = y.min(BUFFER_HEIGHT - 1);
        self.sync_cursor();
    }

    /// Returns the cursor as `(x, y)`.
    pub fn get_cursor(&self) -> (usize, usize) {
        (self.cursor_x, self.cursor_y)
    }

    /// Reads back the cell at `row`, `col`.
    pub fn cell(&self, row: usize, col: usize) -> DisplayCell {
        DisplayCell::from_raw(self.buffer.read_cell(row, col))
    }

    /// The underlying text buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// The port accessor used for the hardware cursor.
    pub fn ports(&self) -> &P {
        &self.ports
    }

    /// Mutable access to the port accessor.
    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: DisplayCell) {
        debug_assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH);
        self.buffer.write_cell(row, col, cell.to_raw());
    }

    fn clear_row(&mut self, row: usize) {
        for col in 0..BUFFER_WIDTH {
            self.write_cell(row, col, DisplayCell::BLANK);
        }
    }

    /// Sends the cursor location to the CRTC, high byte first.
    fn sync_cursor(&mut self) {
        let location = (self.cursor_y * BUFFER_WIDTH + self.cursor_x) as u16;
        self.ports.write_u8(CRTC_INDEX_PORT, CURSOR_HIGH_REGISTER);
        self.ports.write_u8(CRTC_DATA_PORT, (location >> 8) as u8);
        self.ports.write_u8(CRTC_INDEX_PORT, CURSOR_LOW_REGISTER);
        self.ports.write_u8(CRTC_DATA_PORT, location as u8);
    }
}

impl<B: TextBuffer, P: PortIo> Console for ScreenConsole<B, P> {
    fn put_char(&mut self, byte: u8) {
        ScreenConsole::put_char(self, byte);
    }

    fn clear(&mut self) {
        ScreenConsole::clear(self);
    }

    fn print(&mut self, s: &str) {
        ScreenConsole::print(self, s);
    }
}

impl<B: TextBuffer, P: PortIo> fmt::Write for ScreenConsole<B, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MemoryBuffer, RecordingPorts};

    type TestConsole = ScreenConsole<MemoryBuffer, RecordingPorts>;

    fn console() -> TestConsole {
        let mut console = ScreenConsole::new(MemoryBuffer::new(), RecordingPorts::new());
        console.clear();
        console.ports_mut().reset();
        console
    }

    fn row_text(console: &TestConsole, row: usize) -> &str {
        console.buffer().row_text(row)
    }

    #[test]
    fn test_print_reads_back_from_cursor() {
        let mut console = console();
        console.set_cursor(7, 3);
        console.print("hello, world");

        for (i, byte) in "hello, world".bytes().enumerate() {
            assert_eq!(console.cell(3, 7 + i), DisplayCell::new(byte));
        }
        assert_eq!(console.get_cursor(), (19, 3));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut console = console();
        console.print("some\ttext\nmore text");
        console.set_cursor(40, 20);

        console.clear();

        assert_eq!(console.get_cursor(), (0, 0));
        for row in 0..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                assert_eq!(console.cell(row, col), DisplayCell::BLANK);
            }
        }
    }

    #[test]
    fn test_newline_moves_to_next_row() {
        let mut console = console();
        console.print("ab\ncd");
        assert_eq!(row_text(&console, 0), "ab");
        assert_eq!(row_text(&console, 1), "cd");
        assert_eq!(console.get_cursor(), (2, 1));
    }

    #[test]
    fn test_backspace_blanks_previous_cell() {
        let mut console = console();
        console.print("abc\x08");
        assert_eq!(row_text(&console, 0), "ab");
        assert_eq!(console.get_cursor(), (2, 0));
    }

    #[test]
    fn test_backspace_stops_at_column_zero() {
        let mut console = console();
        console.print("x\n\x08");
        assert_eq!(console.get_cursor(), (0, 1));
        assert_eq!(row_text(&console, 0), "x");
    }

    #[test]
    fn test_tab_advances_to_next_stop() {
        let mut console = console();
        console.put_char(b'\t');
        assert_eq!(console.get_cursor(), (4, 0));

        console.print("ab\t");
        assert_eq!(console.get_cursor(), (8, 0));

        console.print("abcd\t");
        assert_eq!(console.get_cursor(), (16, 0));
    }

    #[test]
    fn test_tab_wraps_at_right_edge() {
        let mut console = console();
        console.set_cursor(78, 0);
        console.put_char(b'\t');
        assert_eq!(console.get_cursor(), (0, 1));
    }

    #[test]
    fn test_other_control_bytes_are_ignored() {
        let mut console = console();
        console.print("a\x07\rb");
        assert_eq!(row_text(&console, 0), "ab");
        assert_eq!(console.get_cursor(), (2, 0));
    }

    #[test]
    fn test_wrap_at_right_edge() {
        let mut console = console();
        console.set_cursor(79, 0);
        console.print("xy");
        assert_eq!(console.cell(0, 79), DisplayCell::new(b'x'));
        assert_eq!(console.cell(1, 0), DisplayCell::new(b'y'));
        assert_eq!(console.get_cursor(), (1, 1));
    }

    #[test]
    fn test_full_screen_plus_one_scrolls_once() {
        let mut console = console();

        // Distinct letter per row so the shift is visible
        for row in 0..BUFFER_HEIGHT {
            for _ in 0..BUFFER_WIDTH {
                console.put_char(b'a' + row as u8);
            }
        }

        // Filling the last cell wraps off the bottom
        assert_eq!(console.cell(0, 0), DisplayCell::new(b'b'));
        assert_eq!(row_text(&console, BUFFER_HEIGHT - 1), "");
        assert_eq!(console.get_cursor(), (0, BUFFER_HEIGHT - 1));

        console.put_char(b'z');

        assert_eq!(console.cell(0, 0), DisplayCell::new(b'b'));
        assert_eq!(console.cell(BUFFER_HEIGHT - 2, 0), DisplayCell::new(b'y'));
        assert_eq!(row_text(&console, BUFFER_HEIGHT - 1), "z");
        assert_eq!(console.get_cursor(), (1, BUFFER_HEIGHT - 1));
    }

    #[test]
    fn test_scroll_shifts_rows_up() {
        let mut console = console();
        console.print_at("first", 0, 0);
        console.print_at("second", 1, 0);
        console.print_at("last", BUFFER_HEIGHT - 1, 0);

        console.scroll();

        assert_eq!(row_text(&console, 0), "second");
        assert_eq!(row_text(&console, BUFFER_HEIGHT - 2), "last");
        assert_eq!(row_text(&console, BUFFER_HEIGHT - 1), "");
        assert_eq!(console.get_cursor().1, BUFFER_HEIGHT - 1);
    }

    #[test]
    fn test_newline_on_last_row_scrolls() {
        let mut console = console();
        console.print_at("top", 0, 0);
        console.print_at("bottom", BUFFER_HEIGHT - 1, 0);

        console.put_char(b'\n');

        assert_eq!(row_text(&console, BUFFER_HEIGHT - 2), "bottom");
        assert_eq!(row_text(&console, BUFFER_HEIGHT - 1), "");
        assert_eq!(console.get_cursor(), (0, BUFFER_HEIGHT - 1));
    }

    #[test]
    fn test_print_at_leaves_cursor_after_text() {
        let mut console = console();
        console.print_at("status", 10, 70);
        assert_eq!(row_text(&console, 10).trim_start(), "status");
        assert_eq!(console.get_cursor(), (76, 10));
    }

    #[test]
    fn test_print_at_clamps_coordinates() {
        let mut console = console();
        console.print_at("!", 100, 100);

        // Written into the bottom-right cell, then wrapped off the screen
        assert_eq!(console.cell(BUFFER_HEIGHT - 2, BUFFER_WIDTH - 1), DisplayCell::new(b'!'));
        assert_eq!(console.get_cursor(), (0, BUFFER_HEIGHT - 1));
    }

    #[test]
    fn test_set_cursor_syncs_hardware_high_byte_first() {
        let mut console = console();
        console.set_cursor(15, 12);

        // 12 * 80 + 15 = 975 = 0x03CF
        assert_eq!(
            console.ports().writes(),
            &[
                (CRTC_INDEX_PORT, CURSOR_HIGH_REGISTER),
                (CRTC_DATA_PORT, 0x03),
                (CRTC_INDEX_PORT, CURSOR_LOW_REGISTER),
                (CRTC_DATA_PORT, 0xCF),
            ]
        );
        assert_eq!(console.get_cursor(), (15, 12));
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut console = console();
        console.set_cursor(500, 500);
        assert_eq!(console.get_cursor(), (BUFFER_WIDTH - 1, BUFFER_HEIGHT - 1));
    }

    #[test]
    fn test_every_put_char_syncs_cursor() {
        let mut console = console();
        console.print("abc");
        assert_eq!(console.ports().total_writes(), 3 * 4);

        // Even ignored bytes resync
        console.put_char(0x07);
        assert_eq!(console.ports().total_writes(), 4 * 4);
    }

    #[test]
    fn test_cells_use_white_on_black() {
        let mut console = console();
        console.put_char(b'Q');
        assert_eq!(console.buffer().raw(0, 0), 0x0F51);
        assert_eq!(console.buffer().raw(0, 1), 0x0F20);
    }
}
