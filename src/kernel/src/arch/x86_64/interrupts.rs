//! Interrupt Descriptor Table (IDT) and interrupt handlers for x86_64.

use super::pic::{InterruptIndex, Pics};
use crate::serial_println;
use lazy_static::lazy_static;
use minios_hal::InterruptController;
use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame};

lazy_static! {
    /// The Interrupt Descriptor Table (IDT).
    static ref IDT: InterruptDescriptorTable = {
        let mut idt = InterruptDescriptorTable::new();
        idt.breakpoint.set_handler_fn(breakpoint_handler);
        idt.double_fault.set_handler_fn(double_fault_handler);

        // Hardware interrupts
        idt[InterruptIndex::Timer.as_usize()]
            .set_handler_fn(timer_interrupt_handler);
        idt[InterruptIndex::Keyboard.as_usize()]
            .set_handler_fn(keyboard_interrupt_handler);

        idt
    };
}

/// Loads the IDT, remaps the PICs and enables hardware interrupts.
pub fn init_idt() {
    IDT.load();
    let mut pics = Pics;
    pics.initialize();
    pics.enable();
}

/// Handler for the timer interrupt.
extern "x86-interrupt" fn timer_interrupt_handler(_stack_frame: InterruptStackFrame) {
    Pics.end_of_interrupt(InterruptIndex::Timer.as_u8());
}

/// Handler for the keyboard interrupt.
///
/// Runs the whole keystroke path synchronously: read, decode, edit,
/// execute, draw.
extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    match super::TERMINAL.get() {
        Some(terminal) => terminal.lock().handle_irq(),
        None => {
            // Drain the controller so it keeps raising IRQ1.
            let scancode = crate::keyboard::read_scancode(&mut super::HardwarePorts);
            log::warn!("scancode {:#04x} before terminal start", scancode);
        }
    }

    Pics.end_of_interrupt(InterruptIndex::Keyboard.as_u8());
}

/// Handler for the breakpoint exception (INT3).
extern "x86-interrupt" fn breakpoint_handler(stack_frame: InterruptStackFrame) {
    serial_println!("EXCEPTION: BREAKPOINT\n{:#?}", stack_frame);
}

/// Handler for the double fault exception.
extern "x86-interrupt" fn double_fault_handler(
    stack_frame: InterruptStackFrame,
    _error_code: u64,
) -> ! {
    panic!("EXCEPTION: DOUBLE FAULT\n{:#?}", stack_frame);
}
