//! LEAD Hub Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use shared::LandingConfig;

use crate::pages::HomePage;

#[component]
pub fn App(config: LandingConfig) -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=move || view! { <HomePage config=config.clone()/> }/>
            </Routes>
        </Router>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <div class="not-found-card">
                <h1 class="not-found-title">"404 - Page Not Found"</h1>
                <p class="not-found-message">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="not-found-link">"Go to Home"</span>
                </A>
            </div>
        </main>
    }
}
