//! Responsive grid of article cards.

use leptos::prelude::*;

use super::NewsCard;
use crate::content::{ContentFeed, ContentItem};

/// Projects every feed item into a [`NewsCard`], in feed order, keyed by id.
///
/// Without a `feed` the built-in articles are shown. Column count is decided by
/// the stylesheet breakpoints only.
#[component]
pub fn NewsGrid(
    /// Replacement articles
    #[prop(default = None)]
    feed: Option<ContentFeed>,
) -> impl IntoView {
    let items = feed.unwrap_or_else(ContentFeed::builtin).to_vec();

    view! {
        <section class="news-grid-section">
            <div class="news-grid-container">
                <div class="news-grid">
                    <For
                        each=move || items.clone()
                        key=|item: &ContentItem| item.id
                        children=|item: ContentItem| {
                            view! {
                                <NewsCard
                                    title=item.title
                                    description=item.description
                                    author=item.author
                                    image=item.image
                                    url=item.url
                                />
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::ContentId;
    use crate::render_fragment;

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n}")))
            .collect()
    }

    #[test]
    fn default_grid_shows_three_builtin_cards_in_order() {
        let html = render_fragment(|| view! { <NewsGrid /> });

        assert_eq!(html.matches(r#"class="news-card""#).count(), 3);

        let titles = positions(
            &html,
            &[
                "Concurrent Streams API?",
                "A look at the wide-ranging jargo",
                "Vibes the future of TikTok?",
            ],
        );
        assert!(titles.windows(2).all(|w| w[0] < w[1]), "{titles:?}");

        let tim = html.match_indices("By TIM PETERSON").map(|(i, _)| i).collect::<Vec<_>>();
        let kimeko = html.find("By KIMEKO MCCOY").unwrap();
        assert_eq!(tim.len(), 2);
        assert!(tim[0] < kimeko && kimeko < tim[1]);
    }

    #[test]
    fn override_feed_is_rendered_unsorted() {
        let feed = ContentFeed::from_items(vec![
            ContentItem::new(ContentId(9), "Zulu", "z", "https://example.com/z").unwrap(),
            ContentItem::new(ContentId(2), "Alpha", "a", "https://example.com/a")
                .unwrap()
                .with_author("A. WRITER")
                .with_image("assets/alpha.webp"),
        ])
        .unwrap();

        let html = render_fragment(move || view! { <NewsGrid feed=Some(feed) /> });

        assert_eq!(html.matches(r#"class="news-card""#).count(), 2);
        assert!(html.find("Zulu").unwrap() < html.find("Alpha").unwrap());
        assert_eq!(html.matches("placeholder-card-image").count(), 1);
        assert_eq!(html.matches("By A. WRITER").count(), 1);
    }

    #[test]
    fn empty_feed_renders_empty_grid() {
        let feed = ContentFeed::from_items(Vec::new()).unwrap();
        let html = render_fragment(move || view! { <NewsGrid feed=Some(feed) /> });

        assert!(html.contains(r#"class="news-grid""#));
        assert_eq!(html.matches(r#"class="news-card""#).count(), 0);
    }
}
