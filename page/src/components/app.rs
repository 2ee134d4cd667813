use leptos::prelude::*;

use super::{Header, Hero, NewsGrid};

/// Root composition: header, hero, grid. Nothing flows between them.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <Hero />
            <NewsGrid />
        </div>
    }
}
