//! Terminal setup and teardown functions.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Enters alternate screen (preserves original terminal content)
/// - Enables bracketed paste (pasted answers arrive as one event)
/// - Enables mouse capture (card and button clicks, hover)
/// - Hides the cursor (the compose box draws its own)
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        Hide
    )
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call multiple times; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    let _ = execute!(
        writer,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
    let _ = writer.flush();
}

/// Restore the real terminal after a panic or error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
