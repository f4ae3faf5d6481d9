//! Landing page state management

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::{LandingConfig, LoadingGate, MenuEffect, MenuEvent, MenuState, PageView};

use crate::services::navigation::navigate_to;

/// Per-page landing context. Owned by the `HomePage` instance and disposed with it.
#[derive(Clone, Copy)]
pub struct LandingContext {
    pub gate: RwSignal<LoadingGate>,
    pub menu: RwSignal<MenuState>,
    config: StoredValue<LandingConfig>,
}

impl LandingContext {
    pub fn new(config: LandingConfig) -> Self {
        Self {
            gate: RwSignal::new(LoadingGate::new()),
            menu: RwSignal::new(MenuState::Idle),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> LandingConfig {
        self.config.get_value()
    }

    /// Tracked projection of the current state.
    pub fn page_view(&self) -> PageView {
        self.gate
            .with(|gate| self.menu.with(|menu| PageView::project(gate, menu)))
    }

    /// Flip the loading gate. A no-op once flipped or after the page is disposed.
    pub fn finish_loading(&self) {
        let still_loading = self
            .gate
            .try_with_untracked(|gate| gate.is_loading())
            .unwrap_or(false);
        if !still_loading {
            return;
        }

        if let Some(true) = self.gate.try_update(|gate| gate.finish()) {
            log::info!("Loading finished, showing menu");
        }
    }

    /// Feed an event to the menu state machine and carry out its effect.
    pub fn send(&self, event: MenuEvent) {
        let Some(mut menu) = self.menu.try_get_untracked() else {
            return;
        };

        let result = self
            .config
            .try_with_value(|config| menu.handle(event, config));

        match result {
            Some(Ok(effect)) => {
                log::debug!("Menu -> {}", menu);
                self.menu.set(menu);
                if let Some(effect) = effect {
                    self.run_effect(effect);
                }
            }
            Some(Err(e)) => log::debug!("Ignoring menu event: {}", e),
            None => {}
        }
    }

    fn run_effect(&self, effect: MenuEffect) {
        match effect {
            MenuEffect::ScheduleDismissFinish => {
                let ctx = *self;
                let delay = self.config.with_value(|config| config.exit_animation_ms());
                leptos::task::spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    ctx.send(MenuEvent::DismissFinished);
                });
            }
            MenuEffect::Navigate(path) => {
                if let Err(e) = navigate_to(&path) {
                    log::error!("{}", e);
                }
            }
        }
    }
}

pub fn provide_landing_context(config: LandingConfig) -> LandingContext {
    let context = LandingContext::new(config);
    provide_context(context);
    context
}

pub fn use_landing_context() -> LandingContext {
    expect_context::<LandingContext>()
}
