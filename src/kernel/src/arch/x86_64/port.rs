//! Raw I/O port access.

use minios_hal::PortIo;
use x86_64::instructions::port::Port;

/// [`PortIo`] backed by the `in`/`out` instructions.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwarePorts;

impl PortIo for HardwarePorts {
    fn write_u8(&mut self, port: u16, value: u8) {
        let mut port = Port::<u8>::new(port);
        // SAFETY: The kernel runs in ring 0 with full I/O privilege. The only
        // callers are the console (CRTC registers 0x3D4/0x3D5) and the I/O
        // delay (port 0x80), neither of which affects memory safety.
        unsafe {
            port.write(value);
        }
    }

    fn read_u8(&mut self, port: u16) -> u8 {
        let mut port = Port::<u8>::new(port);
        // SAFETY: Reading the keyboard data port (0x60) only consumes the
        // pending scancode; it has no memory side effects.
        unsafe { port.read() }
    }
}
