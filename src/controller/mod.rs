//! The interaction controller: the pick, answer, reply state machine.
//!
//! ```text
//! Idle --select_card--> Prompted --send_answer--> Replied
//!   ^                                                |
//!   +--------------------- reset --------------------+
//! ```
//!
//! Every operation that is not valid in the current phase is a silent no-op.
//! Operations report whether they changed anything so the caller can decide
//! on redraws and side effects, but none of them can fail.
//!
//! Removing a flight is separate from the state machine: the caller decides
//! when a flight has lived long enough and calls [`InteractionController::remove_flight`].

mod random;

pub use random::{pick_uniform, sample_distinct};

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::config::{PoolConfig, CARD_COUNT};
use crate::state::{FlightId, FlightToken, Phase, SessionState};

/// Owns the session state and the random source that drives it.
#[derive(Debug)]
pub struct InteractionController<R = StdRng> {
    pools: Arc<PoolConfig>,
    session: SessionState,
    rng: R,
}

impl<R: Rng> InteractionController<R> {
    /// Create a controller and deal the first three cards.
    pub fn new(pools: Arc<PoolConfig>, rng: R) -> Self {
        let mut controller = Self {
            pools,
            session: SessionState::default(),
            rng,
        };
        controller.initialize();
        controller
    }

    /// Read-only view of the session.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The pools this controller samples from.
    pub fn pools(&self) -> &PoolConfig {
        &self.pools
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Deal three distinct cards and clear the selection, prompt, draft and
    /// reply.
    ///
    /// Flights already in the air are kept; they leave on their own schedule.
    pub fn initialize(&mut self) {
        let cards = sample_distinct(&self.pools.card_images, CARD_COUNT, &mut self.rng);
        debug!("Dealt cards: {:?}", cards);

        let flights = std::mem::take(&mut self.session.active_flights);
        self.session = SessionState {
            displayed_cards: cards,
            active_flights: flights,
            ..SessionState::default()
        };
    }

    /// Pick a card and draw a prompt for it.
    ///
    /// No-op unless the session is `Idle` and `index` names a displayed card.
    pub fn select_card(&mut self, index: usize) -> bool {
        if self.session.selected_card.is_some() {
            return false;
        }
        if index >= self.session.displayed_cards.len() {
            debug!("Ignoring pick of card {} (only {} shown)", index, self.session.displayed_cards.len());
            return false;
        }
        let Some(prompt) = pick_uniform(&self.pools.themes, &mut self.rng).cloned() else {
            return false;
        };

        debug!("Card {} selected, prompt: {}", index, prompt);
        self.session.selected_card = Some(index);
        self.session.current_prompt = Some(prompt);
        true
    }

    /// Replace the draft answer verbatim.
    ///
    /// No-op outside `Prompted`.
    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        if self.phase() != Phase::Prompted {
            return false;
        }
        self.session.draft_answer = text.into();
        true
    }

    /// Send the draft: launch a flight and draw a reply.
    ///
    /// Returns the new flight's id, or `None` if nothing was sent (wrong phase
    /// or a blank draft). The caller is responsible for removing the flight
    /// once its lifetime is over.
    pub fn send_answer(&mut self) -> Option<FlightId> {
        if !self.session.can_send() {
            return None;
        }
        let reply = pick_uniform(&self.pools.reflections, &mut self.rng).cloned()?;

        let token = FlightToken::new(self.pools.template.apply(&self.session.draft_answer));
        let id = token.id;
        debug!("Answer sent as flight {}: {}", id, token.text);

        self.session.active_flights.push(token);
        self.session.reply_message = Some(reply);
        self.session.is_answer_sent = true;
        Some(id)
    }

    /// Remove a flight by id. Absent ids are ignored.
    pub fn remove_flight(&mut self, id: FlightId) -> bool {
        let before = self.session.active_flights.len();
        self.session.active_flights.retain(|f| f.id != id);
        let removed = self.session.active_flights.len() != before;
        if removed {
            debug!("Flight {} landed", id);
        }
        removed
    }

    /// Return to `Idle` with a fresh deal. Safe in any phase.
    pub fn reset(&mut self) {
        debug!("Reset from {:?}", self.phase());
        self.initialize();
    }
}
