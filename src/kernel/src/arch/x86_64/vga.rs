//! VGA text mode memory for x86_64.
//!
//! Exposes the text buffer at 0xB8000 as a [`TextBuffer`].

use crate::console::{BUFFER_HEIGHT, BUFFER_WIDTH};
use core::ptr;
use minios_hal::TextBuffer;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    cells: [[u16; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// Handle on the VGA text buffer.
pub struct VgaBuffer {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is identity-mapped by the bootloader.
    buffer: *mut Buffer,
}

// SAFETY: VgaBuffer only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime.
// Access is synchronized through the terminal spinlock.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Creates a handle on the VGA text buffer.
    ///
    /// Only one handle should exist; it is owned by the kernel terminal.
    pub(crate) fn new() -> Self {
        VgaBuffer {
            // SAFETY: VGA_BUFFER_ADDR (0xB8000) is the standard VGA text buffer
            // address on x86 systems. This memory is always present and mapped
            // when running on x86 hardware or in QEMU.
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl TextBuffer for VgaBuffer {
    fn write_cell(&mut self, row: usize, col: usize, cell: u16) {
        // SAFETY: Array indexing is bounds-checked and the pointer was validated
        // at construction time. Using volatile write because the VGA buffer is
        // memory-mapped I/O that may be read by hardware at any time.
        unsafe {
            ptr::write_volatile(&mut (*self.buffer).cells[row][col], cell);
        }
    }

    fn read_cell(&self, row: usize, col: usize) -> u16 {
        // SAFETY: Same invariants as `write_cell`.
        unsafe { ptr::read_volatile(&(*self.buffer).cells[row][col]) }
    }
}
