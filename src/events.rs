//! User input events understood by the interaction controller.
//!
//! Key presses, pastes and mouse clicks are all reduced to one of these
//! before they reach [`App::dispatch`](crate::app::App::dispatch).

/// A user-triggered event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A card in the displayed row was clicked
    CardClicked(usize),
    /// The compose box now holds this text
    TextChanged(String),
    /// The send button was pressed
    SendClicked,
    /// The reset button was pressed
    ResetClicked,
}
