//! Test doubles for the hardware seams.
//!
//! None of these allocate, so they work in the kernel's `no_std` build as
//! well as in host tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use minios_kernel::console::ScreenConsole;
//! use minios_kernel::testutil::{MemoryBuffer, RecordingPorts};
//!
//! let mut console = ScreenConsole::new(MemoryBuffer::new(), RecordingPorts::new());
//! console.print("hi");
//! assert_eq!(console.buffer().row_text(0), "hi");
//! ```

use crate::console::{DisplayCell, BUFFER_HEIGHT, BUFFER_WIDTH};
use minios_hal::{Console, PortIo, TextBuffer};

/// Number of port writes a [`RecordingPorts`] keeps.
pub const PORT_LOG_CAPACITY: usize = 256;

/// Number of scripted reads a [`RecordingPorts`] can queue.
pub const READ_QUEUE_CAPACITY: usize = 64;

/// Number of bytes a [`Transcript`] keeps.
pub const TRANSCRIPT_CAPACITY: usize = 4096;

/// A [`PortIo`] that records writes and replays scripted reads.
pub struct RecordingPorts {
    writes: [(u16, u8); PORT_LOG_CAPACITY],
    recorded: usize,
    total: usize,
    reads: [u8; READ_QUEUE_CAPACITY],
    read_head: usize,
    read_tail: usize,
    last_read_port: Option<u16>,
}

impl RecordingPorts {
    /// Creates an empty recorder.
    pub const fn new() -> Self {
        Self {
            writes: [(0, 0); PORT_LOG_CAPACITY],
            recorded: 0,
            total: 0,
            reads: [0; READ_QUEUE_CAPACITY],
            read_head: 0,
            read_tail: 0,
            last_read_port: None,
        }
    }

    /// The recorded `(port, value)` writes, oldest first.
    ///
    /// Only the first [`PORT_LOG_CAPACITY`] writes since the last
    /// [`reset`](Self::reset) are kept.
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes[..self.recorded]
    }

    /// Number of writes since the last reset, including unrecorded ones.
    pub fn total_writes(&self) -> usize {
        self.total
    }

    /// Forgets all recorded writes.
    pub fn reset(&mut self) {
        self.recorded = 0;
        self.total = 0;
    }

    /// Queues a value for a later [`PortIo::read_u8`].
    ///
    /// Values beyond [`READ_QUEUE_CAPACITY`] pending reads are dropped.
    pub fn push_read(&mut self, value: u8) {
        if self.read_tail - self.read_head < READ_QUEUE_CAPACITY {
            self.reads[self.read_tail % READ_QUEUE_CAPACITY] = value;
            self.read_tail += 1;
        }
    }

    /// The port of the most recent read.
    pub fn last_read_port(&self) -> Option<u16> {
        self.last_read_port
    }
}

impl Default for RecordingPorts {
    fn default() -> Self {
        Self::new()
    }
}

impl PortIo for RecordingPorts {
    fn write_u8(&mut self, port: u16, value: u8) {
        if self.recorded < PORT_LOG_CAPACITY {
            self.writes[self.recorded] = (port, value);
            self.recorded += 1;
        }
        self.total += 1;
    }

    /// Returns the next scripted value, or 0 once the queue is empty.
    fn read_u8(&mut self, port: u16) -> u8 {
        self.last_read_port = Some(port);
        if self.read_head == self.read_tail {
            return 0;
        }
        let value = self.reads[self.read_head % READ_QUEUE_CAPACITY];
        self.read_head += 1;
        value
    }
}

/// An in-memory 80x25 [`TextBuffer`].
pub struct MemoryBuffer {
    cells: [[u16; BUFFER_WIDTH]; BUFFER_HEIGHT],
    text: [[u8; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

impl MemoryBuffer {
    /// Creates a zero-filled buffer, like display memory before the first
    /// clear.
    pub const fn new() -> Self {
        Self {
            cells: [[0; BUFFER_WIDTH]; BUFFER_HEIGHT],
            text: [[0; BUFFER_WIDTH]; BUFFER_HEIGHT],
        }
    }

    /// The raw 16-bit cell at `row`, `col`.
    pub fn raw(&self, row: usize, col: usize) -> u16 {
        self.cells[row][col]
    }

    /// The characters of `row` with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> &str {
        let line = &self.text[row];
        let end = line
            .iter()
            .rposition(|&c| c != b' ' && c != 0)
            .map_or(0, |last| last + 1);
        core::str::from_utf8(&line[..end]).unwrap_or("<non-ascii>")
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for MemoryBuffer {
    fn write_cell(&mut self, row: usize, col: usize, cell: u16) {
        self.cells[row][col] = cell;
        self.text[row][col] = DisplayCell::from_raw(cell).character;
    }

    fn read_cell(&self, row: usize, col: usize) -> u16 {
        self.cells[row][col]
    }
}

/// A [`Console`] that records everything written to it.
///
/// Clearing does not erase the transcript; it is counted instead.
pub struct Transcript {
    bytes: [u8; TRANSCRIPT_CAPACITY],
    len: usize,
    clears: usize,
}

impl Transcript {
    /// Creates an empty transcript.
    pub const fn new() -> Self {
        Self {
            bytes: [0; TRANSCRIPT_CAPACITY],
            len: 0,
            clears: 0,
        }
    }

    /// Everything written so far.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("<non-utf8>")
    }

    /// Number of times the console was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Forgets the recorded output and clear count.
    pub fn reset(&mut self) {
        self.len = 0;
        self.clears = 0;
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Transcript {
    fn put_char(&mut self, byte: u8) {
        if self.len < TRANSCRIPT_CAPACITY {
            self.bytes[self.len] = byte;
            self.len += 1;
        }
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
