//! Inline SVG artwork.

use leptos::prelude::*;

/// Megaphone mark next to the wordmark.
#[component]
pub fn LogoMark() -> impl IntoView {
    view! {
        <svg class="logo-circle" viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg">
            <circle cx="20" cy="20" r="20" fill="#1a1a1a"></circle>
            <path d="M26 14L18 18V22L26 26V14Z" fill="#ffeb00"></path>
            <path d="M16 18H14C13.4477 18 13 18.4477 13 19V21C13 21.5523 13.4477 22 14 22H16V18Z" fill="#ffeb00"></path>
            <path d="M26 14C26.5 14 27 14.5 27 15V25C27 25.5 26.5 26 26 26" stroke="#ffeb00" stroke-width="1" fill="none"></path>
        </svg>
    }
}

/// Fixed stand-in for cards without an image. Same markup every time.
#[component]
pub fn PlaceholderImage() -> impl IntoView {
    view! {
        <div class="placeholder-card-image">
            <svg width="80" height="80" viewBox="0 0 80 80" fill="none" xmlns="http://www.w3.org/2000/svg">
                <rect width="80" height="80" fill="#E0E0E0"></rect>
                <path d="M20 60L32 45L44 55L56 40L68 50V70H12V60H20Z" fill="#9E9E9E"></path>
                <circle cx="30" cy="28" r="6" fill="#9E9E9E"></circle>
            </svg>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_fragment;

    #[test]
    fn placeholder_is_deterministic() {
        let first = render_fragment(|| view! { <PlaceholderImage /> });
        let second = render_fragment(|| view! { <PlaceholderImage /> });
        assert_eq!(first, second);
        assert!(first.contains("placeholder-card-image"));
        assert!(first.contains(r##"fill="#E0E0E0""##));
    }
}
