//! Application state and logic for the TUI.
//!
//! [`App`] wraps the [`InteractionController`] with everything the terminal
//! front-end needs around it: the flight removal timers, the message channel
//! they report on, the card cursor, mouse hit areas and the redraw flag.

mod flights;
mod handlers;
mod messages;

pub use flights::FlightScheduler;
pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::{PoolConfig, StartupConfig, CARD_COUNT};
use crate::controller::InteractionController;
use crate::state::SessionState;
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    /// The pick, answer, reply state machine
    pub controller: InteractionController,
    /// Removal timers for flights in the air
    pub flights: FlightScheduler,
    /// Receiver for timer messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Animation tick counter
    pub tick_count: u64,
    /// Card highlighted for keyboard selection
    pub card_cursor: usize,
    /// Clickable regions from the last render
    pub hit_areas: HitAreaRegistry,
    terminal_width: u16,
    terminal_height: u16,
}

impl App {
    /// Create an app around an existing controller.
    pub fn new(controller: InteractionController, flight_lifetime: Duration) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            controller,
            flights: FlightScheduler::new(flight_lifetime, message_tx),
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            card_cursor: 0,
            hit_areas: HitAreaRegistry::new(),
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Create an app from startup settings and loaded pools.
    pub fn from_config(config: &StartupConfig, pools: PoolConfig) -> Self {
        let controller = InteractionController::new(Arc::new(pools), config.build_rng());
        Self::new(controller, config.flight_lifetime)
    }

    /// Current session snapshot.
    pub fn session(&self) -> &SessionState {
        self.controller.session()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the animation clock. Flights in the air keep the screen dirty.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if !self.session().active_flights().is_empty() {
            self.mark_dirty();
        }
    }

    /// Record new terminal dimensions; marks dirty only if they changed.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if self.terminal_width != width || self.terminal_height != height {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    pub fn terminal_height(&self) -> u16 {
        self.terminal_height
    }

    /// Move the keyboard card cursor, wrapping around the row.
    pub fn move_card_cursor(&mut self, forward: bool) {
        let count = self.session().displayed_cards().len().max(1).min(CARD_COUNT);
        self.card_cursor = if forward {
            (self.card_cursor + 1) % count
        } else {
            (self.card_cursor + count - 1) % count
        };
        self.mark_dirty();
    }

    /// Stop background work before exit.
    pub fn shutdown(&mut self) {
        tracing::info!(
            "Shutting down with {} flight(s) still in the air",
            self.flights.pending_count()
        );
        self.flights.cancel_all();
    }
}
