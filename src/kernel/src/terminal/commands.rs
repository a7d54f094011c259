//! Built-in shell commands.
//!
//! The command table is fixed at build time and searched front to back
//! with an exact, case-sensitive name comparison.

use minios_hal::Console;

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Display help information.
    Help,
    /// Clear the screen.
    Clear,
    /// Echo arguments.
    Echo,
    /// Show kernel information.
    About,
}

/// One row of the command table.
#[derive(Debug)]
pub struct CommandEntry {
    /// Name typed at the prompt.
    pub name: &'static str,
    /// One-line summary shown by `help`.
    pub description: &'static str,
    /// The command to run.
    pub command: Command,
}

/// All built-in commands, in `help` order.
pub static COMMANDS: [CommandEntry; 4] = [
    CommandEntry {
        name: "help",
        description: "Display this help message",
        command: Command::Help,
    },
    CommandEntry {
        name: "clear",
        description: "Clear the screen",
        command: Command::Clear,
    },
    CommandEntry {
        name: "echo",
        description: "Print arguments to screen",
        command: Command::Echo,
    },
    CommandEntry {
        name: "about",
        description: "Display kernel information",
        command: Command::About,
    },
];

/// Finds the table entry whose name is exactly `name`.
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.name == name)
}

impl Command {
    /// Execute a command.
    pub fn execute<C: Console>(self, args: &[&str], console: &mut C) {
        match self {
            Command::Help => cmd_help(console),
            Command::Clear => console.clear(),
            Command::Echo => cmd_echo(args, console),
            Command::About => cmd_about(console),
        }
    }
}

/// Display help information.
fn cmd_help<C: Console>(console: &mut C) {
    console.print("Available commands:\n");
    for entry in COMMANDS.iter() {
        console.print("  ");
        console.print(entry.name);
        console.print(" - ");
        console.print(entry.description);
        console.print("\n");
    }
}

fn cmd_echo<C: Console>(args: &[&str], console: &mut C) {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            console.print(" ");
        }
        console.print(arg);
    }
    console.print("\n");
}

/// Show kernel information.
fn cmd_about<C: Console>(console: &mut C) {
    console.print("\n");
    console.print("MiniOS - Minimal x86 Kernel\n");
    console.print("============================\n");
    console.print("Version: 0.1\n");
    console.print("Architecture: x86_64\n");
    console.print("Features:\n");
    console.print("  - Interrupt handling (IDT)\n");
    console.print("  - Keyboard driver\n");
    console.print("  - VGA text mode driver\n");
    console.print("  - Basic shell\n");
    console.print("\n");
    console.print("Written in Rust\n");
    console.print("\n");
}
