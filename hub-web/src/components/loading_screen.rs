//! Full-screen loading indicator

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="spinner"></div>
            <p class="loading-label">"Loading LEAD Hub..."</p>
        </div>
    }
}
