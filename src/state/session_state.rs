//! Session state for one run of the app.
//!
//! [`SessionState`] is a plain snapshot. Only the
//! [`InteractionController`](crate::controller::InteractionController) mutates
//! it; renderers read it through the accessors.

use super::flight::{FlightId, FlightToken};

/// Where the session is in the pick, answer, reply cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No card selected yet
    Idle,
    /// Card selected, prompt shown, compose box active
    Prompted,
    /// Answer sent, reply shown
    Replied,
}

/// All mutable state of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) selected_card: Option<usize>,
    pub(crate) current_prompt: Option<String>,
    pub(crate) draft_answer: String,
    pub(crate) is_answer_sent: bool,
    pub(crate) active_flights: Vec<FlightToken>,
    pub(crate) reply_message: Option<String>,
    pub(crate) displayed_cards: Vec<String>,
}

impl SessionState {
    /// Current phase, derived from the selection and sent flag.
    pub fn phase(&self) -> Phase {
        match (self.selected_card, self.is_answer_sent) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Prompted,
            (Some(_), true) => Phase::Replied,
        }
    }

    pub fn selected_card(&self) -> Option<usize> {
        self.selected_card
    }

    pub fn current_prompt(&self) -> Option<&str> {
        self.current_prompt.as_deref()
    }

    pub fn draft_answer(&self) -> &str {
        &self.draft_answer
    }

    pub fn is_answer_sent(&self) -> bool {
        self.is_answer_sent
    }

    /// Flights in the order they were sent.
    pub fn active_flights(&self) -> &[FlightToken] {
        &self.active_flights
    }

    pub fn reply_message(&self) -> Option<&str> {
        self.reply_message.as_deref()
    }

    pub fn displayed_cards(&self) -> &[String] {
        &self.displayed_cards
    }

    /// Look up a flight by id.
    pub fn flight(&self, id: FlightId) -> Option<&FlightToken> {
        self.active_flights.iter().find(|f| f.id == id)
    }

    /// Whether sending would do anything right now.
    pub fn can_send(&self) -> bool {
        self.phase() == Phase::Prompted && !self.draft_answer.trim().is_empty()
    }
}
