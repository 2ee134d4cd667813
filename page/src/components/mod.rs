//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! └── App
//!     ├── Header      (owns MenuState)
//!     │   └── ExternalLink × (brand + nav)
//!     ├── Hero        (owns SearchInput)
//!     │   └── ExternalLink (headline)
//!     └── NewsGrid    (owns the ContentFeed)
//!         └── NewsCard × feed.len()
//!             └── ExternalLink
//! ```
//!
//! Siblings share nothing. Each stateful component creates its own signal and
//! never hands the setter out.

mod app;
mod document;
mod header;
mod hero;
mod icons;
mod link;
mod news_card;
mod news_grid;

pub use app::App;
pub use document::{PageDocument, Stylesheet};
pub use header::Header;
pub use hero::{HEADLINE_URL, HERO_BACKGROUND, Hero};
pub use icons::{LogoMark, PlaceholderImage};
pub use link::ExternalLink;
pub use news_card::NewsCard;
pub use news_grid::NewsGrid;
