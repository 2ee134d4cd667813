//! The one place external anchors are built.

use leptos::prelude::*;

use crate::links::{ExternalUrl, LINK_REL, LINK_TARGET};

/// Anchor that opens `href` in a new browsing context without an opener
/// reference.
///
/// ```rust,ignore
/// view! { <ExternalLink href=url class="hero-text">"Read more"</ExternalLink> }
/// ```
#[component]
pub fn ExternalLink(
    /// Destination
    href: ExternalUrl,
    /// CSS class hook
    #[prop(default = "")]
    class: &'static str,
    /// Link content
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href.to_string() class=class target=LINK_TARGET rel=LINK_REL>
            {children()}
        </a>
    }
}
