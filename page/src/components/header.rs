//! Sticky site header: branding, navigation and the mobile menu toggle.

use leptos::prelude::*;

use super::{ExternalLink, LogoMark};
use crate::links::{Href, brand_url, nav_links};
use crate::state::MenuState;

/// Site header. Owns the [`MenuState`] that shows or hides the navigation on
/// narrow viewports.
#[component]
pub fn Header(
    /// Menu state on mount (collapsed unless a snapshot asks otherwise)
    #[prop(optional)]
    initial_menu: MenuState,
) -> impl IntoView {
    let (menu, set_menu) = signal(initial_menu);

    let items = nav_links()
        .into_iter()
        .map(|link| {
            let anchor = match link.href {
                Href::External(url) => view! {
                    <ExternalLink href=url class=link.class>{link.label}</ExternalLink>
                }
                .into_any(),
                Href::Placeholder(anchor) => view! {
                    <a href=anchor class=link.class>{link.label}</a>
                }
                .into_any(),
            };
            view! { <li>{anchor}</li> }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="header">
            <div class="header-container">
                <ExternalLink href=brand_url() class="logo-link">
                    <div class="logo">
                        <LogoMark />
                        <span class="logo-text">
                            <span class="logo-text-large">"M"</span>
                            "anz"
                        </span>
                    </div>
                </ExternalLink>

                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| set_menu.update(MenuState::toggle)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class=move || menu.get().nav_class()>
                    <ul class="nav-list">{items}</ul>
                </nav>
            </div>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_fragment;

    #[test]
    fn starts_collapsed() {
        let html = render_fragment(|| view! { <Header /> });

        assert!(html.contains(r#"<nav class="nav">"#));
        assert!(!html.contains("nav-open"));
    }

    #[test]
    fn expanded_seed_marks_nav_open() {
        let html = render_fragment(|| view! { <Header initial_menu=MenuState::Expanded /> });

        assert!(html.contains(r#"<nav class="nav nav-open">"#));
    }

    #[test]
    fn toggle_control_and_nav_entries_present() {
        let html = render_fragment(|| view! { <Header /> });

        assert!(html.contains(r#"aria-label="Toggle navigation menu""#));
        for label in ["News", "Listen", "Watch", "Login"] {
            assert!(html.contains(label), "{label}");
        }
        assert!(html.contains(r##"<a href="#login" class="login-btn">Login</a>"##));
        assert!(html.contains(r#"href="https://www.vox.com/""#));
    }
}
