//! Hash-based routing.
//!
//! URL format:
//! - `#/` - home
//! - `#/categories` - catalog of every sheet
//! - `#/categories/<sheet>` - one sheet
//! - `#/categories/<sheet>/<tab>` - one sheet with a category tab selected
//! - `#/about` - about page
//!
//! Anything else is [`AppRoute::NotFound`]. Whether `<sheet>` exists is decided
//! by the page, not the parser.

const CATEGORIES: &str = "categories";
const ABOUT: &str = "about";

/// Application routes for hash-based navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `#/` or empty hash
    Home,
    /// `#/categories`
    Catalog,
    /// `#/categories/<id>[/<tab>]`
    Sheet { id: String, tab: Option<String> },
    /// `#/about`
    About,
    /// Any other path, kept for display
    NotFound { path: String },
}

impl AppRoute {
    /// Route to a sheet without a tab selected.
    pub fn sheet(id: impl Into<String>) -> Self {
        Self::Sheet {
            id: id.into(),
            tab: None,
        }
    }

    /// Parse a URL hash into a route.
    ///
    /// The leading `#`, leading `/` and one trailing `/` are ignored.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Self::Home;
        }

        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [CATEGORIES] => Self::Catalog,
            [CATEGORIES, id] if !id.is_empty() => Self::sheet(*id),
            [CATEGORIES, id, tab] if !id.is_empty() && !tab.is_empty() => Self::Sheet {
                id: id.to_string(),
                tab: Some(tab.to_string()),
            },
            [ABOUT] => Self::About,
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Catalog => format!("#/{CATEGORIES}"),
            Self::Sheet { id, tab: None } => format!("#/{CATEGORIES}/{id}"),
            Self::Sheet { id, tab: Some(tab) } => format!("#/{CATEGORIES}/{id}/{tab}"),
            Self::About => format!("#/{ABOUT}"),
            Self::NotFound { path } => format!("#/{path}"),
        }
    }

    /// Whether a navbar link to `self` should be marked active on `current`.
    ///
    /// Sheet links match any tab of the same sheet.
    pub fn is_active(&self, current: &AppRoute) -> bool {
        match (self, current) {
            (Self::Sheet { id: a, .. }, Self::Sheet { id: b, .. }) => a == b,
            _ => self == current,
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route, adding a history entry.
    ///
    /// Fires `hashchange`, so the router picks the new route up.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/categories"), AppRoute::Catalog);
        assert_eq!(AppRoute::from_hash("#/categories/"), AppRoute::Catalog);
        assert_eq!(AppRoute::from_hash("#/about"), AppRoute::About);
        assert_eq!(AppRoute::from_hash("#/categories/vim"), AppRoute::sheet("vim"));
        assert_eq!(
            AppRoute::from_hash("#/categories/c/printf"),
            AppRoute::Sheet {
                id: "c".to_string(),
                tab: Some("printf".to_string()),
            }
        );
    }

    #[test]
    fn test_route_not_found() {
        for hash in ["#/vim", "#/categories/c/printf/extra", "#/categories//x", "#/about/me"] {
            assert!(
                matches!(AppRoute::from_hash(hash), AppRoute::NotFound { .. }),
                "{hash}"
            );
        }
        assert_eq!(
            AppRoute::from_hash("#/nope"),
            AppRoute::NotFound {
                path: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_route_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Catalog,
            AppRoute::sheet("makefiles"),
            AppRoute::Sheet {
                id: "csharp".to_string(),
                tab: Some("types".to_string()),
            },
            AppRoute::About,
            AppRoute::NotFound {
                path: "some/where".to_string(),
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_is_active() {
        let vim = AppRoute::sheet("vim");
        let vim_tab = AppRoute::Sheet {
            id: "vim".to_string(),
            tab: Some("editing".to_string()),
        };
        assert!(vim.is_active(&vim_tab));
        assert!(!vim.is_active(&AppRoute::sheet("c")));
        assert!(AppRoute::Home.is_active(&AppRoute::Home));
        assert!(!AppRoute::Catalog.is_active(&vim));
    }
}
