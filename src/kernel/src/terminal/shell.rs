//! Command-line shell with input handling.
//!
//! Provides line editing, a one-entry history slot, tokenizing and dispatch
//! to the built-in commands.

use super::commands;
use minios_common::AsciiBuf;
use minios_hal::Console;

/// Shell prompt.
pub const PROMPT: &str = "$ ";

/// Size of the line buffer, including the slot the terminator used to take.
pub const MAX_COMMAND_LENGTH: usize = 256;

/// Maximum number of arguments passed to a command.
pub const MAX_ARGS: usize = 16;

/// Size of the command-name buffer, including the terminator slot.
pub const MAX_NAME_LENGTH: usize = 64;

/// Bytes a line can hold.
pub const LINE_CAPACITY: usize = MAX_COMMAND_LENGTH - 1;

/// Bytes of a command name that take part in the lookup.
pub const NAME_CAPACITY: usize = MAX_NAME_LENGTH - 1;

type LineBuffer = AsciiBuf<LINE_CAPACITY>;

/// A tokenized command line.
///
/// Arguments borrow from the line they were parsed from.
#[derive(Debug)]
pub struct ParsedLine<'a> {
    name: AsciiBuf<NAME_CAPACITY>,
    args: [&'a str; MAX_ARGS],
    argc: usize,
}

impl<'a> ParsedLine<'a> {
    /// Splits `line` on spaces and tabs.
    ///
    /// The first token is the command name, truncated to
    /// [`NAME_CAPACITY`] bytes. Up to [`MAX_ARGS`] further tokens become
    /// arguments; any beyond that are dropped.
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = line.split(is_blank).filter(|token| !token.is_empty());

        let mut name = AsciiBuf::new();
        if let Some(token) = tokens.next() {
            if name.replace(token).is_err() {
                log::debug!(
                    "command name truncated to {} bytes: {}",
                    NAME_CAPACITY,
                    name.as_str()
                );
            }
        }

        let mut args = [""; MAX_ARGS];
        let mut argc = 0;
        for (slot, token) in args.iter_mut().zip(tokens) {
            *slot = token;
            argc += 1;
        }

        Self { name, args, argc }
    }

    /// The command name, empty for a blank line.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments after the command name.
    pub fn args(&self) -> &[&'a str] {
        &self.args[..self.argc]
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Line-oriented shell.
#[derive(Debug, Default)]
pub struct Shell {
    /// Line being edited.
    line: LineBuffer,
    /// Last submitted non-empty line.
    history: LineBuffer,
}

impl Shell {
    /// Create a new shell with empty buffers.
    pub fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            history: LineBuffer::new(),
        }
    }

    /// Resets the buffers, clears the screen and shows the banner and the
    /// first prompt.
    pub fn init<C: Console>(&mut self, console: &mut C) {
        self.line.clear();
        self.history.clear();

        console.clear();
        console.print("MiniOS Shell v0.1\n");
        console.print("=================\n");
        console.print("Type 'help' for available commands.\n\n");
        Self::prompt(console);
    }

    /// Display the shell prompt.
    pub fn prompt<C: Console>(console: &mut C) {
        console.print(PROMPT);
    }

    /// Handles one decoded character.
    ///
    /// Printable characters are appended and echoed while there is room,
    /// backspace removes the last one, and newline submits the line. Any
    /// other character is dropped.
    pub fn handle_input<C: Console>(&mut self, c: char, console: &mut C) {
        match c {
            '\n' => {
                console.put_char(b'\n');

                if !self.line.is_empty() {
                    // Both buffers share a capacity, so this never truncates.
                    let _ = self.history.replace(self.line.as_str());
                    Self::execute(self.line.as_str(), console);
                }

                self.line.clear();
                Self::prompt(console);
            }
            '\x08' => {
                if self.line.pop().is_some() {
                    console.put_char(b'\x08');
                }
            }
            ' '..='~' => {
                let byte = c as u8;
                if self.line.try_push(byte).is_ok() {
                    console.put_char(byte);
                }
            }
            _ => {}
        }
    }

    /// Tokenizes `line` and runs the matching built-in command.
    ///
    /// A blank line does nothing. An unknown name prints a diagnostic.
    pub fn execute<C: Console>(line: &str, console: &mut C) {
        let parsed = ParsedLine::parse(line);
        let name = parsed.name();
        if name.is_empty() {
            return;
        }

        match commands::lookup(name) {
            Some(entry) => {
                log::debug!("running '{}' with {} argument(s)", name, parsed.args().len());
                entry.command.execute(parsed.args(), console);
            }
            None => {
                log::debug!("unknown command: {}", name);
                console.print("Unknown command: ");
                console.print(name);
                console.print("\nType 'help' for available commands.\n");
            }
        }
    }

    /// The line currently being edited.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// The last submitted non-empty line.
    ///
    /// Kept for inspection only; the shell never recalls it.
    pub fn history(&self) -> &str {
        self.history.as_str()
    }
}
