//! MiniOS Kernel Entry Point
//!
//! Boots straight into the console shell. Everything after start-up happens
//! in the keyboard interrupt handler while the CPU idles in `hlt`.
//!
//! The binary only does something useful on bare metal (`target_os =
//! "none"`); host builds get a stub `main` so the workspace still builds and
//! tests there.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod bare_metal {
    use bootloader::{entry_point, BootInfo};
    use core::fmt::Write;
    use core::panic::PanicInfo;
    use minios_kernel::arch::x86_64::{self, interrupts};
    use minios_kernel::serial_println;

    entry_point!(kernel_main);

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        // Phase 1: serial logging
        minios_kernel::init();
        log::info!("MiniOS booting");

        // Phase 2: screen and shell, before any keyboard interrupt can arrive
        x86_64::init_terminal();
        log::info!("[ OK ] Terminal started");

        // Phase 3: interrupts
        interrupts::init_idt();
        log::info!("[ OK ] IDT loaded, interrupts enabled");

        x86_64::halt_loop()
    }

    /// Panic handler.
    ///
    /// Called when the kernel encounters an unrecoverable error.
    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("KERNEL PANIC: {}", info);

        // The panic may have happened with the terminal locked.
        if let Some(terminal) = x86_64::TERMINAL.get() {
            if let Some(mut terminal) = terminal.try_lock() {
                let _ = write!(terminal.console_mut(), "\n\n!!! KERNEL PANIC !!!\n{}\n", info);
            }
        }

        x86_64::halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("minios is a bare-metal kernel; build it for an x86_64 `target_os = \"none\"` target");
    std::process::exit(1);
}
