//! Navigable views.
//!
//! The marketplace has three views. Paths are matched exactly (a trailing
//! slash is ignored) and anything else falls back to the login view.

use std::fmt;

/// A screen the front-end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    SignUp,
    Login,
    Home,
}

impl View {
    /// The path this view is served at.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::SignUp => "/signup",
            Self::Login => "/login",
            Self::Home => "/home",
        }
    }

    /// Resolve a path to a view, falling back to [`View::Login`].
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/signup" => Self::SignUp,
            "/login" => Self::Login,
            "/home" => Self::Home,
            _ => {
                tracing::debug!(path, "Unknown path, falling back to login");
                Self::Login
            }
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
