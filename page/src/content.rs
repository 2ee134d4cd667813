//! Content records for the news grid.
//!
//! The page ships a fixed, ordered table of articles ([`ContentFeed::builtin`]).
//! The record shape is serde-friendly so a future data source can feed the
//! same rendering contract.
//!
//! # Example
//!
//! ```rust
//! use manz_page::content::{ContentFeed, ContentId, ContentItem};
//!
//! let item = ContentItem::new(ContentId(7), "Headline", "Summary", "https://example.com/a")
//!     .unwrap()
//!     .with_author("JANE DOE");
//! let feed = ContentFeed::from_items(vec![item]).unwrap();
//! assert_eq!(feed.len(), 1);
//! assert!(feed.get(ContentId(7)).unwrap().image.is_none());
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::links::ExternalUrl;

/// Identifier, unique within one feed. Also the render key in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u32);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolved image reference. Opaque to the page; the bundler decides what it
/// points at. Never blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a resolved reference. Blank values give `None`.
    pub fn new(src: impl Into<String>) -> Option<Self> {
        non_blank(src.into()).map(Self)
    }

    pub(crate) fn from_static(src: &'static str) -> Self {
        Self(src.to_owned())
    }

    /// The `src` value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One article card.
///
/// Deserialization goes through the same checks as [`ContentItem::new`]: blank
/// optionals become `None`, then [`ContentItem::validate`] runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContentItem")]
pub struct ContentItem {
    /// Unique identifier
    pub id: ContentId,
    /// Headline
    pub title: String,
    /// Summary text
    pub description: String,
    /// Byline; `None` omits the byline line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Card image; `None` renders the placeholder graphic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    /// Article destination
    pub url: ExternalUrl,
}

impl ContentItem {
    /// Build a validated item with no author and no image.
    pub fn new(
        id: ContentId,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let item = Self {
            id,
            title: title.into(),
            description: description.into(),
            author: None,
            image: None,
            url: ExternalUrl::parse(url)?,
        };
        item.validate()?;
        Ok(item)
    }

    /// Set the byline. Blank names are treated as absent.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_blank(author.into());
        self
    }

    /// Set the image. Blank references are treated as absent.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = ImageRef::new(src);
        self
    }

    /// Check the title and url invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::EmptyTitle { id: self.id });
        }
        if !self.url.is_valid() {
            return Err(ContentError::InvalidUrl {
                url: self.url.to_string(),
            });
        }
        Ok(())
    }
}

/// Wire shape of [`ContentItem`] before normalization.
#[derive(Deserialize)]
struct RawContentItem {
    id: ContentId,
    title: String,
    description: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    image: Option<String>,
    url: ExternalUrl,
}

impl TryFrom<RawContentItem> for ContentItem {
    type Error = ContentError;

    fn try_from(raw: RawContentItem) -> Result<Self, Self::Error> {
        let item = Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            author: raw.author.and_then(non_blank),
            image: raw.image.and_then(ImageRef::new),
            url: raw.url,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Byline text (`By TIM PETERSON`), or `None` for a missing or blank author.
pub(crate) fn byline(author: Option<&str>) -> Option<String> {
    author
        .filter(|name| !name.trim().is_empty())
        .map(|name| format!("By {name}"))
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Ordered, read-only list of articles. Display order is insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ContentItem>", into = "Vec<ContentItem>")]
pub struct ContentFeed {
    items: Vec<ContentItem>,
}

impl ContentFeed {
    /// Check every item and reject repeated identifiers.
    pub fn from_items(items: Vec<ContentItem>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// The articles published on the landing page.
    pub fn builtin() -> Self {
        let items = vec![
            ContentItem {
                id: ContentId(1),
                title: "WTF is IAB Tech Lab's Concurrent Streams API?".into(),
                description: "This week's Future of TV Briefing looks at how IAB Tech Lab's Concurrent Streams API aims to address one of the fundamental challenges facing the programmatic supply chain as more major live games and events are streamed.".into(),
                author: Some("TIM PETERSON".into()),
                image: Some(ImageRef::from_static("assets/images/news/news_card_001.webp")),
                url: ExternalUrl::from_static(
                    "https://digiday.com/future-of-tv/future-of-tv-briefing-wtf-is-iab-tech-labs-concurrent-streams-api/",
                ),
            },
            ContentItem {
                id: ContentId(2),
                title: "A look at the wide-ranging jargo coming out of the many ad networks".into(),
                description: "Retail media is booming. Here's a breakdown of the expanding media network landscape and why definitions behind retail, commerce and beyond matter.".into(),
                author: Some("KIMEKO MCCOY".into()),
                image: Some(ImageRef::from_static("assets/images/news/news_card_002.webp")),
                url: ExternalUrl::from_static(
                    "https://digiday.com/marketing/a-look-at-the-wide-ranging-jargon-coming-out-of-the-many-ad-networks/",
                ),
            },
            ContentItem {
                id: ContentId(3),
                title: "Is Meta's Vibes the future of TikTok?".into(),
                description: "This week's Future of TV Briefing looks at how the AI-generated content feed of Meta's Vibes could fill the doomscrolling void if TikTok users abandon the U.S. version of the app.".into(),
                author: Some("TIM PETERSON".into()),
                image: Some(ImageRef::from_static("assets/images/news/news_card_003.webp")),
                url: ExternalUrl::from_static(
                    "https://digiday.com/future-of-tv/future-of-tv-briefing-is-metas-vibes-the-future-of-tiktok/",
                ),
            },
        ];
        Self { items }
    }

    /// Items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    /// Look up by identifier.
    pub fn get(&self, id: ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned copy of the items, for keyed rendering.
    pub fn to_vec(&self) -> Vec<ContentItem> {
        self.items.clone()
    }
}

impl Default for ContentFeed {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<ContentItem>> for ContentFeed {
    type Error = ContentError;

    fn try_from(items: Vec<ContentItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<ContentFeed> for Vec<ContentItem> {
    fn from(feed: ContentFeed) -> Self {
        feed.items
    }
}

impl<'a> IntoIterator for &'a ContentFeed {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
