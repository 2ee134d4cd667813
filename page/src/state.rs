//! Component-local UI state.
//!
//! Both values live inside a signal owned by the component that renders them
//! (`Header` for [`MenuState`], `Hero` for [`SearchInput`]). Nothing else on the
//! page reads or writes them.

use tracing::debug;

/// Mobile navigation menu. Starts collapsed; every toggle flips it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Navigation hidden on narrow viewports
    #[default]
    Collapsed,
    /// Navigation shown on narrow viewports
    Expanded,
}

impl MenuState {
    /// Flip in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Whether the navigation is shown on narrow viewports.
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    /// Class list for the `<nav>` element.
    pub fn nav_class(self) -> &'static str {
        match self {
            Self::Collapsed => "nav",
            Self::Expanded => "nav nav-open",
        }
    }
}

/// Controlled search box text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
}

impl SearchInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// What the input currently displays.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Commit the value reported by the input element.
    pub fn input(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Submit the form. Searching is not supported, so this only traces the
    /// query; the text stays as typed.
    pub fn submit(&self) {
        debug!(
            target: "manz_page::search",
            query = %self.text,
            chars = self.text.chars().count(),
            "search submitted (no-op)"
        );
    }
}
