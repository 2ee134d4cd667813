//! # manz-page
//!
//! The Manz news landing page as [Leptos](https://leptos.dev/) components.
//!
//! The page is a sticky header, a hero banner with a search box and a grid
//! of three article cards. The only state is two component-local UI toggles:
//! the mobile menu and the search text.
//!
//! ## Delivery
//!
//! - **Browser (`csr` feature)**: the `landing` crate mounts [`components::App`]
//!   into `<body>`, so both toggles are live.
//! - **Static export (`ssr` feature, default)**: [`render_page`] renders the
//!   full document to a string and `manz-render` writes it to disk.
//!
//! ## Quick Start
//!
//! ```rust
//! use manz_page::{render_page, RenderOptions};
//!
//! let html = render_page(&RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("news-grid"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - article records and the built-in feed
//! - [`links`] - the external-link contract
//! - [`state`] - menu and search state machines
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS
//! - `config` / `export` - static export settings and file output (ssr)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod error;
#[cfg(feature = "ssr")]
pub mod export;
pub mod links;
pub mod state;
pub mod styles;

pub use components::Stylesheet;
pub use error::ContentError;
#[cfg(feature = "ssr")]
pub use error::ExportError;

/// Default `<title>` of the exported document.
pub const DEFAULT_TITLE: &str = "Manz — News & Insights";

/// Settings for [`render_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document title
    pub title: String,
    /// Inline or linked CSS
    pub stylesheet: Stylesheet,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet: Stylesheet::Inline,
        }
    }
}

/// Render the complete page, `<!DOCTYPE html>` included.
///
/// Without a browser the toggles keep their initial values: menu collapsed,
/// search box empty.
#[cfg(feature = "ssr")]
pub fn render_page(options: &RenderOptions) -> String {
    use components::PageDocument;
    use leptos::prelude::*;

    let title = options.title.clone();
    let stylesheet = options.stylesheet.clone();
    let html = render_fragment(move || {
        view! { <PageDocument title=title stylesheet=stylesheet /> }
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render any view to HTML inside a fresh reactive owner.
#[cfg(feature = "ssr")]
pub fn render_fragment<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: leptos::prelude::IntoView,
{
    use leptos::prelude::Owner;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| build().to_html())
}
