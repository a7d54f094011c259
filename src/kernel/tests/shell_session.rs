//! End-to-end keystroke tests: raw scancodes in, screen cells out.

use minios_kernel::console::{ScreenConsole, BUFFER_HEIGHT, CRTC_DATA_PORT, CRTC_INDEX_PORT};
use minios_kernel::terminal::Terminal;
use minios_kernel::testutil::{MemoryBuffer, RecordingPorts};

type TestTerminal = Terminal<MemoryBuffer, RecordingPorts>;

const LEFT_SHIFT: u8 = 0x2A;
const RELEASE: u8 = 0x80;

fn started() -> TestTerminal {
    let mut terminal = Terminal::new(ScreenConsole::new(MemoryBuffer::new(), RecordingPorts::new()));
    terminal.start();
    terminal
}

/// Set-1 press scancode for a character on the US layout, and whether it
/// needs shift.
fn scancode_for(c: char) -> (u8, bool) {
    const UNSHIFTED: &str = "\x001234567890-=\x08\tqwertyuiop[]\n\x00asdfghjkl;'`\x00\\zxcvbnm,./";
    const SHIFTED: &str = "\x00!@#$%^&*()_+\x08\tQWERTYUIOP{}\n\x00ASDFGHJKL:\"~\x00|ZXCVBNM<>?";
    if c == ' ' {
        return (0x39, false);
    }
    // Index 0 of the strings stands for scancode 0x01 (Esc).
    if let Some(i) = UNSHIFTED.find(c).filter(|_| c != '\0') {
        return (i as u8 + 1, false);
    }
    if let Some(i) = SHIFTED.find(c).filter(|_| c != '\0') {
        return (i as u8 + 1, true);
    }
    panic!("no scancode for {:?}", c);
}

/// Types `text` the way a keyboard would, pressing and releasing shift as
/// needed.
fn type_text(terminal: &mut TestTerminal, text: &str) {
    for c in text.chars() {
        let (code, shift) = scancode_for(c);
        if shift {
            terminal.on_scancode(LEFT_SHIFT);
        }
        terminal.on_scancode(code);
        terminal.on_scancode(code | RELEASE);
        if shift {
            terminal.on_scancode(LEFT_SHIFT | RELEASE);
        }
    }
}

fn row(terminal: &TestTerminal, row: usize) -> &str {
    terminal.console().buffer().row_text(row)
}

#[test]
fn test_echo_session() {
    let mut terminal = started();
    type_text(&mut terminal, "echo hi there\n");

    assert_eq!(row(&terminal, 4), "$ echo hi there");
    assert_eq!(row(&terminal, 5), "hi there");
    assert_eq!(row(&terminal, 6), "$");
    assert_eq!(terminal.console().get_cursor(), (2, 6));
    assert_eq!(terminal.shell().history(), "echo hi there");
}

#[test]
fn test_unknown_command_session() {
    let mut terminal = started();
    type_text(&mut terminal, "bogus\n");

    assert_eq!(row(&terminal, 5), "Unknown command: bogus");
    assert_eq!(row(&terminal, 6), "Type 'help' for available commands.");
    assert_eq!(row(&terminal, 7), "$");
}

#[test]
fn test_shifted_punctuation_reaches_echo() {
    let mut terminal = started();
    type_text(&mut terminal, "echo Hello, World!\n");
    assert_eq!(row(&terminal, 5), "Hello, World!");
}

#[test]
fn test_caps_lock_session() {
    let mut terminal = started();
    terminal.on_scancode(0x3A);
    type_text(&mut terminal, "abc");
    assert_eq!(terminal.shell().line(), "ABC");
}

#[test]
fn test_backspace_on_empty_line_changes_nothing() {
    let mut terminal = started();
    let cursor = terminal.console().get_cursor();
    let before: Vec<String> = (0..BUFFER_HEIGHT).map(|r| row(&terminal, r).to_string()).collect();

    type_text(&mut terminal, "\x08");

    let after: Vec<String> = (0..BUFFER_HEIGHT).map(|r| row(&terminal, r).to_string()).collect();
    assert_eq!(before, after);
    assert_eq!(terminal.console().get_cursor(), cursor);
    assert_eq!(terminal.shell().line(), "");
}

#[test]
fn test_backspace_erases_typed_character() {
    let mut terminal = started();
    type_text(&mut terminal, "ecx\x08ho\n");
    assert_eq!(row(&terminal, 4), "$ echo");
    assert_eq!(row(&terminal, 5), "");
    assert_eq!(row(&terminal, 6), "$");
}

#[test]
fn test_clear_command_leaves_only_prompt() {
    let mut terminal = started();
    type_text(&mut terminal, "clear\n");

    assert_eq!(row(&terminal, 0), "$");
    for r in 1..BUFFER_HEIGHT {
        assert_eq!(row(&terminal, r), "", "row {}", r);
    }
    assert_eq!(terminal.console().get_cursor(), (2, 0));
}

#[test]
fn test_help_output_scrolls_screen() {
    let mut terminal = started();
    for _ in 0..4 {
        type_text(&mut terminal, "help\n");
    }

    // 5 banner rows + 4 * (1 prompt line + 5 help lines) > 25 rows
    assert_eq!(terminal.console().get_cursor(), (2, BUFFER_HEIGHT - 1));
    assert_eq!(row(&terminal, BUFFER_HEIGHT - 1), "$");
    assert_eq!(row(&terminal, BUFFER_HEIGHT - 2), "  about - Display kernel information");
    assert_eq!(row(&terminal, 0), "$ help");
}

#[test]
fn test_irq_path_syncs_hardware_cursor() {
    let mut terminal = started();
    terminal.console_mut().ports_mut().reset();
    terminal.console_mut().ports_mut().push_read(0x1E);

    terminal.handle_irq();

    // 'a' echoed at (2, 4); cursor now at 4 * 80 + 3 = 323 = 0x0143
    let ports = terminal.console().ports();
    assert_eq!(
        ports.writes(),
        &[
            (CRTC_INDEX_PORT, 14),
            (CRTC_DATA_PORT, 0x01),
            (CRTC_INDEX_PORT, 15),
            (CRTC_DATA_PORT, 0x43),
        ]
    );
    assert_eq!(row(&terminal, 4), "$ a");
}
