//! Keybind hints shown in the footer, per phase.

use crate::state::Phase;

/// A single `key: description` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub description: &'static str,
}

const fn hint(key: &'static str, description: &'static str) -> KeyHint {
    KeyHint { key, description }
}

const IDLE_HINTS: &[KeyHint] = &[
    hint("1-3", "pick a star"),
    hint("←/→", "move"),
    hint("Enter", "pick"),
    hint("Esc", "quit"),
];

const PROMPTED_HINTS: &[KeyHint] = &[
    hint("type", "answer"),
    hint("Enter", "send"),
    hint("Ctrl+U", "clear"),
    hint("Esc", "quit"),
];

const REPLIED_HINTS: &[KeyHint] = &[hint("Enter/n", "next star"), hint("Esc", "quit")];

/// Hints for the keys that do something in `phase`.
pub fn hints_for(phase: Phase) -> &'static [KeyHint] {
    match phase {
        Phase::Idle => IDLE_HINTS,
        Phase::Prompted => PROMPTED_HINTS,
        Phase::Replied => REPLIED_HINTS,
    }
}
