//! # Landing Error Type
//!
//! [`LandingError`] is the single error type for the landing page core and the
//! browser layer built on top of it. Nothing in here is surfaced to the user:
//! the web front-end logs these and degrades to a safe state.
//!
//! ## Error Categories
//!
//! 1. **Input guards** - closed-set lookups that received an unknown key
//!    - [`UnknownChoice`](LandingError::UnknownChoice)
//!    - [`MissingRedirect`](LandingError::MissingRedirect)
//!
//! 2. **State machine** - an event that has no transition from the current state
//!    - [`InvalidTransition`](LandingError::InvalidTransition)
//!
//! 3. **Configuration** - host supplied settings that fail validation
//!    - [`Config`](LandingError::Config) / [`Json`](LandingError::Json)
//!
//! 4. **Browser** - window, document, timer or navigation APIs unavailable
//!    - [`Browser`](LandingError::Browser)

use thiserror::Error;

/// Convenience type alias for `Result<T, LandingError>`.
pub type Result<T> = std::result::Result<T, LandingError>;

#[derive(Debug, Error)]
pub enum LandingError {
    /// A key outside the closed `nutrition | mindfulness` set
    #[error("Unknown choice: {0:?}")]
    UnknownChoice(String),

    /// A path whose query string carries no `redirect` parameter
    #[error("No redirect parameter in target")]
    MissingRedirect,

    /// The menu state machine has no edge for this event
    #[error("Invalid transition: {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    /// Configuration value rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration block is not valid JSON
    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser API unavailable or failed
    #[error("Browser error: {0}")]
    Browser(String),
}
