//! A single article card.

use leptos::prelude::*;

use super::{ExternalLink, PlaceholderImage};
use crate::content::{ImageRef, byline};
use crate::links::ExternalUrl;

/// One article rendered as a single clickable region.
///
/// Missing `image` falls back to [`PlaceholderImage`]; a missing or blank
/// `author` drops the byline line entirely.
#[component]
pub fn NewsCard(
    /// Headline
    #[prop(into)]
    title: String,
    /// Summary text
    #[prop(into)]
    description: String,
    /// Byline name
    #[prop(default = None)]
    author: Option<String>,
    /// Resolved image reference
    #[prop(default = None)]
    image: Option<ImageRef>,
    /// Article destination
    url: ExternalUrl,
) -> impl IntoView {
    let media = match image {
        Some(src) => view! { <img src=src.to_string() alt=title.clone() /> }.into_any(),
        None => view! { <PlaceholderImage /> }.into_any(),
    };
    let byline = byline(author.as_deref());

    view! {
        <ExternalLink href=url class="news-card-link">
            <article class="news-card">
                <div class="card-image">{media}</div>
                <div class="card-content">
                    <h3 class="card-title">{title}</h3>
                    {byline.map(|text| view! { <p class="card-author">{text}</p> })}
                    <p class="card-description">{description}</p>
                </div>
            </article>
        </ExternalLink>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::render_fragment;

    fn url() -> ExternalUrl {
        ExternalUrl::parse("https://example.com/story").unwrap()
    }

    #[test]
    fn full_card_renders_image_and_byline() {
        let html = render_fragment(|| {
            view! {
                <NewsCard
                    title="Headline"
                    description="Summary"
                    author=Some("TIM PETERSON".to_string())
                    image=ImageRef::new("assets/a.webp")
                    url=url()
                />
            }
        });

        assert!(html.contains(r#"<img src="assets/a.webp" alt="Headline""#));
        assert!(html.contains("By TIM PETERSON"));
        assert!(!html.contains("placeholder-card-image"));
        assert!(html.contains(r#"class="news-card-link""#));
    }

    #[test]
    fn missing_image_renders_placeholder_not_img() {
        let html = render_fragment(|| view! { <NewsCard title="T" description="D" url=url() /> });

        assert!(html.contains("placeholder-card-image"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn missing_author_omits_byline() {
        let html = render_fragment(|| view! { <NewsCard title="T" description="D" url=url() /> });

        assert!(!html.contains("card-author"));
        assert!(!html.contains("By "));
    }

    #[test]
    fn blank_author_omits_byline() {
        let html = render_fragment(|| {
            view! { <NewsCard title="T" description="D" author=Some("  ".to_string()) url=url() /> }
        });

        assert!(!html.contains("card-author"));
        assert!(!html.contains("By "));
    }

    #[test]
    fn deserialized_blank_fields_render_placeholder_and_no_byline() {
        use crate::content::ContentItem;

        let item: ContentItem = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "T", "description": "D", "author": "", "image": "",
            "url": "https://example.com/a"
        }))
        .unwrap();
        let html = render_fragment(move || {
            view! {
                <NewsCard
                    title=item.title
                    description=item.description
                    author=item.author
                    image=item.image
                    url=item.url
                />
            }
        });

        assert!(html.contains("placeholder-card-image"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("card-author"));
    }

    #[test]
    fn card_is_external_link() {
        let html = render_fragment(|| view! { <NewsCard title="T" description="D" url=url() /> });

        assert!(html.contains("<a "));
        assert!(html.contains(r#"href="https://example.com/story""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
