//! Deferred removal of flight tokens.
//!
//! Each sent answer gets its own one-shot timer task. When the timer fires it
//! posts [`AppMessage::FlightLanded`] back to the event loop; the app then
//! removes the token by id. Timers are independent of each other and of
//! resets, so a flight launched before a reset still lands on time.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::AppMessage;
use crate::state::FlightId;

struct PendingFlight {
    launched_at: Instant,
    handle: JoinHandle<()>,
}

/// Schedules and tracks flight removal timers, keyed by flight id.
pub struct FlightScheduler {
    lifetime: Duration,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    pending: HashMap<FlightId, PendingFlight>,
}

impl FlightScheduler {
    pub fn new(lifetime: Duration, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            lifetime,
            message_tx,
            pending: HashMap::new(),
        }
    }

    /// How long each flight stays up.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Start the removal timer for `id`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, id: FlightId) {
        let message_tx = self.message_tx.clone();
        let launched_at = Instant::now();
        let deadline = launched_at + self.lifetime;

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // The receiver is gone only during shutdown
            let _ = message_tx.send(AppMessage::FlightLanded { id });
        });

        tracing::debug!("Flight {} scheduled to land in {:?}", id, self.lifetime);
        self.pending.insert(id, PendingFlight { launched_at, handle });
    }

    /// Forget a flight whose timer has fired. Returns false for unknown ids.
    pub fn landed(&mut self, id: FlightId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Abort every pending timer.
    pub fn cancel_all(&mut self) {
        for (id, flight) in self.pending.drain() {
            flight.handle.abort();
            tracing::debug!("Flight {} cancelled", id);
        }
    }

    /// Fraction of the lifetime elapsed for `id`, clamped to `0.0..=1.0`.
    pub fn progress(&self, id: FlightId) -> Option<f32> {
        let flight = self.pending.get(&id)?;
        if self.lifetime.is_zero() {
            return Some(1.0);
        }
        let elapsed = flight.launched_at.elapsed().as_secs_f32();
        Some((elapsed / self.lifetime.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// Number of timers still running.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: FlightId) -> bool {
        self.pending.contains_key(&id)
    }
}

impl Drop for FlightScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
