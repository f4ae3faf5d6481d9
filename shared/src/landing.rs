//! # Landing Page State
//!
//! The two pieces of transient page state and how they change:
//!
//! - [`LoadingGate`] - `true` on mount, flipped to `false` once by the loading timer
//! - [`MenuState`] - which card (if any) is selected and where the modal is in its life
//!
//! [`PageView`] is the pure projection of both that the renderer draws from.
//!
//! ## Menu transitions
//!
//! ```text
//! Idle --Select(c)--> Confirming(c) --Confirm--> Navigating(c)   (terminal)
//!                          |
//!                       Dismiss
//!                          v
//!                    Dismissing(c) --DismissFinished--> Idle
//! ```

use std::fmt;

use crate::choice::Choice;
use crate::config::LandingConfig;
use crate::error::{LandingError, Result};
use crate::redirect::auth_redirect_path;

/// Holds the loading screen up until the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    loading: bool,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self { loading: true }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reveal the menu. Returns `true` only for the call that actually flipped the gate.
    pub fn finish(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Idle,
    Confirming(Choice),
    /// Exit animation playing; the modal is still on screen.
    Dismissing(Choice),
    /// Navigation issued. Nothing leaves this state.
    Navigating(Choice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select(Choice),
    Dismiss,
    DismissFinished,
    Confirm,
}

/// Side effect the host must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEffect {
    /// Let the exit animation run, then deliver [`MenuEvent::DismissFinished`].
    ScheduleDismissFinish,
    /// Full page navigation to this path.
    Navigate(String),
}

impl MenuState {
    /// The selected choice. Some for every state in which the modal is on screen.
    pub fn selection(&self) -> Option<Choice> {
        match *self {
            MenuState::Idle => None,
            MenuState::Confirming(choice)
            | MenuState::Dismissing(choice)
            | MenuState::Navigating(choice) => Some(choice),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MenuState::Idle => "idle",
            MenuState::Confirming(_) => "confirming",
            MenuState::Dismissing(_) => "dismissing",
            MenuState::Navigating(_) => "navigating",
        }
    }

    /// Apply `event`. On error the state is left untouched.
    pub fn handle(&mut self, event: MenuEvent, config: &LandingConfig) -> Result<Option<MenuEffect>> {
        let (next, effect) = match (*self, event) {
            (MenuState::Idle, MenuEvent::Select(choice)) => (MenuState::Confirming(choice), None),
            (MenuState::Confirming(choice), MenuEvent::Confirm) => (
                MenuState::Navigating(choice),
                Some(MenuEffect::Navigate(auth_redirect_path(&config.auth_path, choice))),
            ),
            (MenuState::Confirming(choice), MenuEvent::Dismiss) if config.dismissible => (
                MenuState::Dismissing(choice),
                Some(MenuEffect::ScheduleDismissFinish),
            ),
            (MenuState::Dismissing(_), MenuEvent::DismissFinished) => (MenuState::Idle, None),
            (state, event) => {
                return Err(LandingError::InvalidTransition {
                    state: state.name(),
                    event: event.name(),
                });
            }
        };

        *self = next;
        Ok(effect)
    }
}

impl MenuEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MenuEvent::Select(_) => "select",
            MenuEvent::Dismiss => "dismiss",
            MenuEvent::DismissFinished => "dismiss_finished",
            MenuEvent::Confirm => "confirm",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selection() {
            Some(choice) => write!(f, "{}({})", self.name(), choice),
            None => f.write_str(self.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Entering,
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalView {
    pub choice: Choice,
    pub phase: ModalPhase,
}

/// What the page shows for a given `(loading, selection)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Loading,
    Menu { modal: Option<ModalView> },
}

impl PageView {
    pub fn project(gate: &LoadingGate, menu: &MenuState) -> Self {
        if gate.is_loading() {
            return PageView::Loading;
        }

        let modal = menu.selection().map(|choice| ModalView {
            choice,
            phase: match menu {
                MenuState::Dismissing(_) => ModalPhase::Leaving,
                _ => ModalPhase::Entering,
            },
        });

        PageView::Menu { modal }
    }

    pub fn menu_visible(&self) -> bool {
        matches!(self, PageView::Menu { .. })
    }

    pub fn modal(&self) -> Option<ModalView> {
        match self {
            PageView::Loading => None,
            PageView::Menu { modal } => *modal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_finishes_once() {
        let mut gate = LoadingGate::new();
        assert!(gate.is_loading());
        assert!(gate.finish());
        assert!(!gate.is_loading());
        assert!(!gate.finish());
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_select_and_confirm() {
        let config = LandingConfig::default();
        for choice in Choice::ALL {
            let mut menu = MenuState::Idle;
            assert_eq!(menu.handle(MenuEvent::Select(choice), &config).unwrap(), None);
            assert_eq!(menu, MenuState::Confirming(choice));
            assert_eq!(menu.selection(), Some(choice));

            let effect = menu.handle(MenuEvent::Confirm, &config).unwrap();
            assert_eq!(
                effect,
                Some(MenuEffect::Navigate(format!("/auth?redirect=/{}", choice)))
            );
            assert_eq!(menu, MenuState::Navigating(choice));
        }
    }

    #[test]
    fn test_dismiss_round_trip() {
        let config = LandingConfig {
            dismissible: true,
            ..LandingConfig::default()
        };
        let mut menu = MenuState::Confirming(Choice::Mindfulness);

        let effect = menu.handle(MenuEvent::Dismiss, &config).unwrap();
        assert_eq!(effect, Some(MenuEffect::ScheduleDismissFinish));
        assert_eq!(menu.selection(), Some(Choice::Mindfulness));

        assert_eq!(menu.handle(MenuEvent::DismissFinished, &config).unwrap(), None);
        assert_eq!(menu, MenuState::Idle);
    }

    #[test]
    fn test_dismiss_disabled_by_default() {
        let config = LandingConfig::default();
        let mut menu = MenuState::Confirming(Choice::Nutrition);
        assert!(menu.handle(MenuEvent::Dismiss, &config).is_err());
        assert_eq!(menu, MenuState::Confirming(Choice::Nutrition));
    }

    #[test]
    fn test_navigating_is_terminal() {
        let config = LandingConfig::default();
        let events = [
            MenuEvent::Select(Choice::Mindfulness),
            MenuEvent::Dismiss,
            MenuEvent::DismissFinished,
            MenuEvent::Confirm,
        ];
        for event in events {
            let mut menu = MenuState::Navigating(Choice::Nutrition);
            let err = menu.handle(event, &config).unwrap_err();
            assert!(matches!(
                err,
                LandingError::InvalidTransition { state: "navigating", .. }
            ));
            assert_eq!(menu, MenuState::Navigating(Choice::Nutrition));
        }
    }

    #[test]
    fn test_invalid_transitions_leave_state() {
        let config = LandingConfig::default();

        let mut menu = MenuState::Idle;
        assert!(menu.handle(MenuEvent::Confirm, &config).is_err());
        assert!(menu.handle(MenuEvent::Dismiss, &config).is_err());
        assert_eq!(menu, MenuState::Idle);

        // cards sit under the overlay, a second select cannot swap the choice
        let mut menu = MenuState::Confirming(Choice::Nutrition);
        assert!(menu.handle(MenuEvent::Select(Choice::Mindfulness), &config).is_err());
        assert_eq!(menu, MenuState::Confirming(Choice::Nutrition));

        let mut menu = MenuState::Dismissing(Choice::Nutrition);
        assert!(menu.handle(MenuEvent::Confirm, &config).is_err());
        assert_eq!(menu, MenuState::Dismissing(Choice::Nutrition));
    }

    #[test]
    fn test_page_view_projection() {
        let mut gate = LoadingGate::new();
        let menu = MenuState::Confirming(Choice::Nutrition);
        assert_eq!(PageView::project(&gate, &menu), PageView::Loading);
        assert!(!PageView::project(&gate, &menu).menu_visible());

        gate.finish();
        assert_eq!(
            PageView::project(&gate, &MenuState::Idle),
            PageView::Menu { modal: None }
        );

        let view = PageView::project(&gate, &menu);
        assert!(view.menu_visible());
        assert_eq!(
            view.modal(),
            Some(ModalView {
                choice: Choice::Nutrition,
                phase: ModalPhase::Entering
            })
        );

        let view = PageView::project(&gate, &MenuState::Dismissing(Choice::Mindfulness));
        assert_eq!(view.modal().map(|m| m.phase), Some(ModalPhase::Leaving));
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuState::Idle.to_string(), "idle");
        assert_eq!(
            MenuState::Confirming(Choice::Nutrition).to_string(),
            "confirming(nutrition)"
        );
    }
}
