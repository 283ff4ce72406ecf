//! Result type alias for Sakuseikan operations.

use super::sakusei_error::SakuseiError;

/// Type alias for Results using [`SakuseiError`].
pub type SakuseiResult<T> = Result<T, SakuseiError>;
