//! Page routing.

use std::fmt;

/// Top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Demo,
}

impl Route {
    /// Resolve a path. Unknown paths redirect to the landing page.
    pub fn resolve(path: &str) -> Self {
        match path.trim().trim_matches('/') {
            "demo" => Self::Demo,
            _ => Self::Landing,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::resolve(""), Route::Landing);
        assert_eq!(Route::resolve("demo"), Route::Demo);
        assert_eq!(Route::resolve("/demo/"), Route::Demo);
    }

    #[test]
    fn unknown_paths_redirect_to_landing() {
        assert_eq!(Route::resolve("pricing"), Route::Landing);
        assert_eq!(Route::resolve("demo/extra"), Route::Landing);
    }

    #[test]
    fn display_is_absolute_path() {
        assert_eq!(Route::Landing.to_string(), "/");
        assert_eq!(Route::Demo.to_string(), "/demo");
    }
}
