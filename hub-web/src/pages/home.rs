//! Home Page - loading gate, topic menu and confirmation modal

use leptos::prelude::*;
use shared::{Choice, LandingConfig, MenuEvent, ModalPhase};

use crate::components::{ChoiceModal, LoadingScreen, MenuCard};
use crate::services::timer::ScheduledTask;
use crate::state::landing::{provide_landing_context, use_landing_context};
use crate::utils::constants::APP_TITLE;

#[component]
pub fn HomePage(config: LandingConfig) -> impl IntoView {
    let delay_ms = config.loading_delay_ms;
    let ctx = provide_landing_context(config);

    // Timer lives exactly as long as this page
    match ScheduledTask::schedule(delay_ms, move || ctx.finish_loading()) {
        Ok(task) => on_cleanup(move || task.cancel()),
        Err(e) => {
            log::error!("Could not schedule loading timer, showing menu now: {}", e);
            ctx.finish_loading();
        }
    }

    let page = Memo::new(move |_| ctx.page_view());

    view! {
        <Show
            when=move || page.get().menu_visible()
            fallback=|| view! { <LoadingScreen/> }
        >
            <MenuView/>
        </Show>
    }
}

#[component]
fn MenuView() -> impl IntoView {
    let ctx = use_landing_context();
    let config = ctx.config();

    let page = Memo::new(move |_| ctx.page_view());
    let selection = Memo::new(move |_| page.get().modal().map(|modal| modal.choice));
    let leaving = Memo::new(move |_| {
        page.get()
            .modal()
            .is_some_and(|modal| modal.phase == ModalPhase::Leaving)
    });

    let on_select = Callback::new(move |choice: Choice| {
        log::info!("Selected {}", choice);
        ctx.send(MenuEvent::Select(choice));
    });
    let on_confirm = Callback::new(move |_: ()| ctx.send(MenuEvent::Confirm));
    let on_dismiss = Callback::new(move |_: ()| ctx.send(MenuEvent::Dismiss));

    let timings = format!(
        "--backdrop-fade: {}ms; --modal-transition: {}ms;",
        config.backdrop_fade_ms, config.modal_transition_ms
    );

    view! {
        <main class="landing" style=timings>
            <h1 class="landing-title">{APP_TITLE}</h1>

            <div class="menu-grid">
                {Choice::ALL
                    .into_iter()
                    .map(|choice| view! { <MenuCard choice=choice on_select=on_select/> })
                    .collect_view()}
            </div>

            {move || {
                selection
                    .get()
                    .map(|choice| {
                        view! {
                            <ChoiceModal
                                choice=choice
                                leaving=leaving
                                dismissible=config.dismissible
                                on_confirm=on_confirm
                                on_dismiss=on_dismiss
                            />
                        }
                    })
            }}
        </main>
    }
}
