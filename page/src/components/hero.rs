//! Hero banner with the featured headline and the search form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::ExternalLink;
use crate::links::ExternalUrl;
use crate::state::SearchInput;

/// Featured article behind the headline.
pub const HEADLINE_URL: &str = "https://digiday.com/media-buying/wtf-ad-context-protocol/";

/// Banner background.
pub const HERO_BACKGROUND: &str = "assets/images/hero/hero_04.png";

const SEARCH_PLACEHOLDER: &str = "Search for news, articles, and insights...";

/// Banner with a headline link and a search box that searches nothing.
///
/// The input is controlled by a [`SearchInput`] signal. Submitting cancels the
/// browser's form navigation and only traces the query.
#[component]
pub fn Hero() -> impl IntoView {
    let (search, set_search) = signal(SearchInput::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        search.with(SearchInput::submit);
    };

    view! {
        <section class="hero" style=format!("background-image: url({HERO_BACKGROUND})")>
            <div class="hero-content">
                <ExternalLink href=ExternalUrl::from_static(HEADLINE_URL) class="hero-text">
                    <h1>
                        <span class="highlight-text">"Explainer Series:"</span>
                        " WTH is Ad Context Protocol"
                    </h1>
                    <p>
                        "Open standard aims to let AI agents negotiate directly across ad tech, with comparisons to OpenRTB and header bidding."
                    </p>
                </ExternalLink>
            </div>

            <div class="search-container">
                <form class="search-form" on:submit=on_submit>
                    <input
                        type="text"
                        class="search-input"
                        placeholder=SEARCH_PLACEHOLDER
                        aria-label="Search for articles"
                        prop:value=move || search.with(|s| s.text().to_owned())
                        on:input=move |ev| set_search.update(|s| s.input(event_target_value(&ev)))
                    />
                    <button type="submit" class="search-button">"SEARCH"</button>
                </form>
            </div>
        </section>
    }
}
