//! # Landing Configuration
//!
//! Timings and the auth route for the landing page. The page runs in a
//! browser, so there is no environment to read: the host may inject a JSON
//! block and every missing field falls back to its default.
//!
//! ```rust
//! use shared::config::LandingConfig;
//!
//! let config = LandingConfig::from_json(r#"{ "loading_delay_ms": 1000 }"#).unwrap();
//! assert_eq!(config.loading_delay_ms, 1000);
//! assert_eq!(config.auth_path, "/auth");
//! ```

use serde::Deserialize;

use crate::error::{LandingError, Result};

pub const DEFAULT_LOADING_DELAY_MS: u32 = 2500;
pub const DEFAULT_AUTH_PATH: &str = "/auth";
pub const DEFAULT_BACKDROP_FADE_MS: u32 = 500;
pub const DEFAULT_MODAL_TRANSITION_MS: u32 = 300;

const MAX_LOADING_DELAY_MS: u32 = 60_000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// How long the loading screen stays up after mount
    pub loading_delay_ms: u32,

    /// Route the confirm action navigates to; the choice rides along as `?redirect=`
    pub auth_path: String,

    /// Overlay blur/opacity fade duration
    pub backdrop_fade_ms: u32,

    /// Modal fade+scale duration
    pub modal_transition_ms: u32,

    /// Whether a backdrop click or Escape closes the modal. Off unless the host opts in.
    pub dismissible: bool,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            auth_path: DEFAULT_AUTH_PATH.to_string(),
            backdrop_fade_ms: DEFAULT_BACKDROP_FADE_MS,
            modal_transition_ms: DEFAULT_MODAL_TRANSITION_MS,
            dismissible: false,
        }
    }
}

impl LandingConfig {
    /// Parse a JSON configuration block and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// How long a dismissed modal stays mounted: the slower of the backdrop
    /// fade and the panel transition, so both exit animations complete.
    pub fn exit_animation_ms(&self) -> u32 {
        self.backdrop_fade_ms.max(self.modal_transition_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.auth_path.starts_with('/') {
            return Err(LandingError::Config(format!(
                "auth_path must be an absolute path, got {:?}",
                self.auth_path
            )));
        }

        if self.auth_path.contains(['?', '#']) {
            return Err(LandingError::Config(
                "auth_path must not carry a query or fragment".to_string(),
            ));
        }

        if self.modal_transition_ms == 0 {
            return Err(LandingError::Config(
                "modal_transition_ms must be greater than zero".to_string(),
            ));
        }

        if self.loading_delay_ms > MAX_LOADING_DELAY_MS {
            return Err(LandingError::Config(format!(
                "loading_delay_ms must be at most {}",
                MAX_LOADING_DELAY_MS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.loading_delay_ms, 2500);
        assert_eq!(config.auth_path, "/auth");
        assert_eq!(config.backdrop_fade_ms, 500);
        assert_eq!(config.modal_transition_ms, 300);
        assert!(!config.dismissible);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LandingConfig::from_json(r#"{ "dismissible": true }"#).unwrap();
        assert!(config.dismissible);
        assert_eq!(config.loading_delay_ms, DEFAULT_LOADING_DELAY_MS);

        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_exit_animation_covers_slowest_fade() {
        let config = LandingConfig::default();
        assert_eq!(config.exit_animation_ms(), 500);
        assert!(config.exit_animation_ms() >= config.backdrop_fade_ms);
        assert!(config.exit_animation_ms() >= config.modal_transition_ms);

        let config = LandingConfig {
            backdrop_fade_ms: 100,
            modal_transition_ms: 400,
            ..LandingConfig::default()
        };
        assert_eq!(config.exit_animation_ms(), 400);
    }

    #[test]
    fn test_validation_failures() {
        for json in [
            r#"{ "auth_path": "auth" }"#,
            r#"{ "auth_path": "/auth?x=1" }"#,
            r#"{ "auth_path": "/auth#top" }"#,
            r#"{ "modal_transition_ms": 0 }"#,
            r#"{ "loading_delay_ms": 600000 }"#,
        ] {
            assert!(
                matches!(LandingConfig::from_json(json), Err(LandingError::Config(_))),
                "{json} should fail validation"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LandingConfig::from_json("{ not json"),
            Err(LandingError::Json(_))
        ));
        assert!(matches!(
            LandingConfig::from_json(r#"{ "loading_delay_ms": "soon" }"#),
            Err(LandingError::Json(_))
        ));
    }
}
