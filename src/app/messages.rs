//! AppMessage enum for async communication within the application.

use crate::state::FlightId;

/// Messages received from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A flight's lifetime is over and it should leave the screen
    FlightLanded { id: FlightId },
}
