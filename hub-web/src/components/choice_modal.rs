//! Choice Confirmation Modal
//!
//! Blurred backdrop with a panel showing the copy for the selected topic and a
//! Continue button. When the host enables dismissal, backdrop clicks and the
//! Escape key request a dismiss.

use leptos::ev;
use leptos::prelude::*;
use shared::Choice;

use crate::utils::constants::ESCAPE_KEY;

#[component]
pub fn ChoiceModal(
    choice: Choice,
    /// Exit animation in progress
    #[prop(into)]
    leaving: Signal<bool>,
    dismissible: bool,
    on_confirm: Callback<()>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let copy = choice.copy();

    if dismissible {
        let keydown = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == ESCAPE_KEY {
                on_dismiss.run(());
            }
        });
        on_cleanup(move || keydown.remove());
    }

    view! {
        <div
            class="modal-backdrop"
            class:leaving=move || leaving.get()
            on:click=move |_| {
                if dismissible {
                    on_dismiss.run(());
                }
            }
        >
            <div
                class="modal-panel"
                class:leaving=move || leaving.get()
                role="dialog"
                aria-modal="true"
                data-choice=choice.as_str()
                on:click=|ev| ev.stop_propagation()
            >
                <h2 class="modal-title">{copy.modal_title}</h2>
                <p class="modal-description">{copy.modal_description}</p>
                <button class="btn-continue" on:click=move |_| on_confirm.run(())>
                    "Continue"
                </button>
            </div>
        </div>
    }
}
