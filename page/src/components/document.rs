//! Full HTML shell for the static export.

use leptos::prelude::*;

use super::App;
use crate::styles::PAGE_CSS;

/// How the document gets its CSS.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stylesheet {
    /// `<style>` block in `<head>`
    #[default]
    Inline,
    /// `<link rel="stylesheet">` to a file written next to the page
    Linked(String),
}

/// `<html>` document wrapping [`App`].
#[component]
pub fn PageDocument(
    /// `<title>` text
    #[prop(into)]
    title: String,
    /// Inline CSS unless told otherwise
    #[prop(optional)]
    stylesheet: Stylesheet,
) -> impl IntoView {
    let styles = match stylesheet {
        Stylesheet::Inline => view! { <style>{PAGE_CSS}</style> }.into_any(),
        Stylesheet::Linked(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                {styles}
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
