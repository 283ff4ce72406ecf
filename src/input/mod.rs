//! Keyboard and paste handling.
//!
//! Raw crossterm events are turned into [`InputCommand`]s based on the
//! current phase. Text editing is resolved here: the controller only ever
//! receives the complete new draft.

pub mod keybindings;

pub use keybindings::{hints_for, KeyHint};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::CARD_COUNT;
use crate::events::UiEvent;
use crate::state::{Phase, SessionState};

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Forward to the interaction controller
    Ui(UiEvent),
    /// Move the card cursor one step left
    CursorLeft,
    /// Move the card cursor one step right
    CursorRight,
    /// Leave the app
    Quit,
}

/// Map a key press to a command, given the session and card cursor.
pub fn command_for_key(
    key: &KeyEvent,
    session: &SessionState,
    cursor: usize,
) -> Option<InputCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybinds (always active)
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(InputCommand::Quit),
        KeyCode::Esc => return Some(InputCommand::Quit),
        _ => {}
    }

    match session.phase() {
        Phase::Idle => match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                (index < CARD_COUNT).then_some(InputCommand::Ui(UiEvent::CardClicked(index)))
            }
            KeyCode::Left | KeyCode::Char('h') => Some(InputCommand::CursorLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(InputCommand::CursorRight),
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(InputCommand::Ui(UiEvent::CardClicked(cursor)))
            }
            _ => None,
        },
        Phase::Prompted => {
            let draft = session.draft_answer();
            match key.code {
                KeyCode::Enter => Some(InputCommand::Ui(UiEvent::SendClicked)),
                KeyCode::Char('u') if ctrl => {
                    (!draft.is_empty()).then(|| InputCommand::Ui(UiEvent::TextChanged(String::new())))
                }
                KeyCode::Backspace => {
                    let mut chars = draft.chars();
                    chars.next_back()?;
                    Some(InputCommand::Ui(UiEvent::TextChanged(chars.as_str().to_string())))
                }
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    let mut text = draft.to_string();
                    text.push(c);
                    Some(InputCommand::Ui(UiEvent::TextChanged(text)))
                }
                _ => None,
            }
        }
        Phase::Replied => match key.code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(InputCommand::Ui(UiEvent::ResetClicked))
            }
            _ => None,
        },
    }
}

/// Map a bracketed paste to a command. Only the compose box accepts text.
///
/// Line breaks become spaces; the answer is a single sentence.
pub fn command_for_paste(text: &str, session: &SessionState) -> Option<InputCommand> {
    if session.phase() != Phase::Prompted {
        return None;
    }
    let pasted: String = text
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if pasted.is_empty() {
        return None;
    }
    let mut draft = session.draft_answer().to_string();
    draft.push_str(&pasted);
    Some(InputCommand::Ui(UiEvent::TextChanged(draft)))
}
