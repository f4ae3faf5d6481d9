//! # Auth Redirect Targets
//!
//! Builds the navigation target handed to the authentication route once a
//! choice is confirmed, and reads it back.
//!
//! ```rust
//! use shared::choice::Choice;
//! use shared::redirect::auth_redirect_path;
//!
//! assert_eq!(
//!     auth_redirect_path("/auth", Choice::Nutrition),
//!     "/auth?redirect=/nutrition"
//! );
//! ```

use crate::choice::Choice;
use crate::error::{LandingError, Result};

/// Query parameter carrying the post-login destination.
pub const REDIRECT_PARAM: &str = "redirect";

/// The in-app path the auth route should return to, e.g. `/mindfulness`.
///
/// Only the choice segment is percent-encoded; the leading `/` stays literal.
pub fn redirect_target(choice: Choice) -> String {
    format!("/{}", urlencoding::encode(choice.as_str()))
}

/// `{auth_path}?redirect=/{choice}`
pub fn auth_redirect_path(auth_path: &str, choice: Choice) -> String {
    format!("{}?{}={}", auth_path, REDIRECT_PARAM, redirect_target(choice))
}

/// Recover the choice from a path produced by [`auth_redirect_path`].
pub fn parse_redirect_choice(path_and_query: &str) -> Result<Choice> {
    let (_, query) = path_and_query
        .split_once('?')
        .ok_or(LandingError::MissingRedirect)?;

    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == REDIRECT_PARAM)
        .map(|(_, value)| value)
        .ok_or(LandingError::MissingRedirect)?;

    let decoded = urlencoding::decode(raw)
        .map_err(|_| LandingError::UnknownChoice(raw.to_string()))?;

    decoded
        .strip_prefix('/')
        .ok_or_else(|| LandingError::UnknownChoice(decoded.to_string()))?
        .parse()
}
