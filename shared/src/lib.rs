//! # LEAD Hub Landing Core
//!
//! Framework-free model of the landing page: a loading gate, a two-card topic
//! menu and the confirmation hand-off to the authentication route. The web
//! front-end renders from these types; everything here is plain Rust and
//! testable without a browser.
//!
//! ## Structure
//!
//! - **[`choice`]**: the closed [`Choice`](choice::Choice) set and its copy table
//! - **[`landing`]**: [`LoadingGate`](landing::LoadingGate), the
//!   [`MenuState`](landing::MenuState) machine and the [`PageView`](landing::PageView) projection
//! - **[`redirect`]**: `/auth?redirect=/{choice}` construction and parsing
//! - **[`config`]**: [`LandingConfig`](config::LandingConfig) timings and auth route
//! - **[`error`]**: [`LandingError`](error::LandingError)
//!
//! ## Usage
//!
//! ```rust
//! use shared::{Choice, LandingConfig, LoadingGate, MenuEffect, MenuEvent, MenuState, PageView};
//!
//! let config = LandingConfig::default();
//! let mut gate = LoadingGate::new();
//! let mut menu = MenuState::Idle;
//!
//! gate.finish();
//! menu.handle(MenuEvent::Select(Choice::Nutrition), &config).unwrap();
//! assert!(PageView::project(&gate, &menu).modal().is_some());
//!
//! let effect = menu.handle(MenuEvent::Confirm, &config).unwrap();
//! assert_eq!(effect, Some(MenuEffect::Navigate("/auth?redirect=/nutrition".into())));
//! ```

pub mod choice;
pub mod config;
pub mod error;
pub mod landing;
pub mod redirect;

pub use choice::{Choice, ChoiceCopy};
pub use config::LandingConfig;
pub use error::{LandingError, Result};
pub use landing::{LoadingGate, MenuEffect, MenuEvent, MenuState, ModalPhase, ModalView, PageView};
pub use redirect::auth_redirect_path;
