//! Menu Card Component

use leptos::prelude::*;
use shared::Choice;

/// Clickable card for one topic.
#[component]
pub fn MenuCard(choice: Choice, on_select: Callback<Choice>) -> impl IntoView {
    let copy = choice.copy();

    view! {
        <button
            class="menu-card"
            data-choice=choice.as_str()
            on:click=move |_| on_select.run(choice)
        >
            <h2 class="menu-card-title">{format!("{} {}", copy.icon, copy.card_title)}</h2>
            <p class="menu-card-description">{copy.card_description}</p>
        </button>
    }
}
