//! Outbound link contract.
//!
//! Every external destination on the page is an [`ExternalUrl`]. Rendering goes
//! through [`crate::components::ExternalLink`], which always opens the target in a
//! new browsing context with [`LINK_REL`], so the destination never gets a handle
//! back to the opener.
//!
//! Labels and destinations in [`nav_links`] are kept exactly as published, even
//! where they do not match ("News" points at a colour palette page).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// `target` attribute for every external link.
pub const LINK_TARGET: &str = "_blank";

/// `rel` attribute for every external link.
pub const LINK_REL: &str = "noopener noreferrer";

/// Destination of the branding mark.
pub const BRAND_URL: &str = "https://www.vox.com/";

static ABSOLUTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?(?::\d{1,5})?(?:[/?#]\S*)?$")
        .expect("absolute url pattern compiles")
});

/// An absolute `http(s)` URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExternalUrl(String);

impl ExternalUrl {
    /// Parse and check that `raw` is an absolute http(s) link.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ContentError> {
        let raw = raw.into();
        if ABSOLUTE_URL.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(ContentError::InvalidUrl { url: raw })
        }
    }

    /// Wrap a literal that is known to be valid. Checked by [`ExternalUrl::is_valid`]
    /// in the content tests.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        Self(raw.to_owned())
    }

    /// Whether the wrapped value still satisfies the absolute-url rule.
    pub fn is_valid(&self) -> bool {
        ABSOLUTE_URL.is_match(&self.0)
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ExternalUrl {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ExternalUrl> for String {
    fn from(value: ExternalUrl) -> Self {
        value.0
    }
}

/// Where a navigation entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Href {
    /// Leaves the page; rendered with the new-context contract.
    External(ExternalUrl),
    /// In-page anchor with no behaviour behind it (e.g. `#login`).
    Placeholder(&'static str),
}

/// One entry in the header navigation list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text
    pub label: &'static str,
    /// Destination
    pub href: Href,
    /// Extra class hook (the login affordance is styled as a button)
    pub class: &'static str,
}

/// The branding link target.
pub fn brand_url() -> ExternalUrl {
    ExternalUrl::from_static(BRAND_URL)
}

/// Header navigation, in display order.
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink {
            label: "News",
            href: Href::External(ExternalUrl::from_static(
                "https://www.color-hex.com/color-palette/7200",
            )),
            class: "",
        },
        NavLink {
            label: "Listen",
            href: Href::External(ExternalUrl::from_static(
                "https://graphicdesign.stackexchange.com/questions/113544/what-category-of-font-is-the-vox-logo",
            )),
            class: "",
        },
        NavLink {
            label: "Watch",
            href: Href::External(ExternalUrl::from_static(
                "https://www.youtube.com/shorts/ccZBTv27yQI",
            )),
            class: "",
        },
        NavLink {
            label: "Login",
            href: Href::Placeholder("#login"),
            class: "login-btn",
        },
    ]
}
