//! MiniOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the narrow seams between the console core and the
//! hardware it drives. Each trait has one implementation doing real I/O on
//! bare metal and test doubles in `minios_kernel::testutil`.

#![no_std]

/// Port used as an I/O delay target. Writes to it are discarded.
pub const IO_DELAY_PORT: u16 = 0x80;

/// Trait for byte-wide x86 I/O port access.
pub trait PortIo {
    /// Writes a byte to the given I/O port.
    fn write_u8(&mut self, port: u16, value: u8);
    /// Reads a byte from the given I/O port.
    fn read_u8(&mut self, port: u16) -> u8;

    /// Waits a small, fixed amount of time by writing to an unused port.
    fn io_wait(&mut self) {
        self.write_u8(IO_DELAY_PORT, 0);
    }
}

/// Trait for a memory-mapped text display made of 16-bit cells.
///
/// The low byte of a cell is the character, the high byte the attribute.
pub trait TextBuffer {
    /// Writes the raw cell at `row`, `col`.
    fn write_cell(&mut self, row: usize, col: usize, cell: u16);
    /// Reads the raw cell at `row`, `col`.
    fn read_cell(&self, row: usize, col: usize) -> u16;
}

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a single byte, interpreting control characters.
    fn put_char(&mut self, byte: u8);
    /// Clears the console screen.
    fn clear(&mut self);

    /// Writes a string byte by byte.
    fn print(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }
}

/// Trait for controlling interrupts.
pub trait InterruptController {
    /// Globally enables interrupts.
    fn enable(&mut self);
    /// Globally disables interrupts.
    fn disable(&mut self);
    /// Signals the end of an interrupt to the controller.
    fn end_of_interrupt(&mut self, irq: u8);
}
