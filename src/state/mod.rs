//! State management types.
//!
//! - [`SessionState`] - everything that changes during a session
//! - [`Phase`] - Idle, Prompted or Replied
//! - [`FlightToken`] / [`FlightId`] - answers in flight

mod flight;
mod session_state;

pub use flight::{FlightId, FlightToken};
pub use session_state::{Phase, SessionState};
