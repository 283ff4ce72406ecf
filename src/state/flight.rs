//! Flight tokens: answers on their way out of the screen.

use std::fmt;

use uuid::Uuid;

/// Unique identifier of a flight token.
///
/// Removal always matches on this id, never on position, so several flights
/// can land in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightId(Uuid);

impl FlightId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sent answer that is still being animated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightToken {
    pub id: FlightId,
    /// The full templated answer
    pub text: String,
}

impl FlightToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: FlightId::new(),
            text: text.into(),
        }
    }
}
