//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page is derived from `#/path`
//! - **Navbar and footer never re-render on navigation**
//! - **Tab changes keep the sheet page mounted**: only the page kind and the
//!   sheet id remount; the tab is passed down as a signal
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
use raccourcis_core::Library;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::about::AboutPage;
use crate::components::catalog::CatalogPage;
use crate::components::footer::Footer;
use crate::components::home::HomePage;
use crate::components::navbar::Navbar;
use crate::components::not_found::NotFoundPage;
use crate::components::sheet::SheetPage;
use crate::core::Locale;
use crate::models::AppRoute;
use crate::utils::dom::scroll_to_top;

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Route with the sheet tab stripped; changes only when the page must remount.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Page {
    Home,
    Catalog,
    Sheet(String),
    About,
    NotFound,
}

impl From<&AppRoute> for Page {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Home => Self::Home,
            AppRoute::Catalog => Self::Catalog,
            AppRoute::Sheet { id, .. } => Self::Sheet(id.clone()),
            AppRoute::About => Self::About,
            AppRoute::NotFound { .. } => Self::NotFound,
        }
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Home
/// - `#/categories` → Catalog
/// - `#/categories/<sheet>[/<tab>]` → Sheet
/// - `#/about` → About
/// - anything else → Not found
#[component]
pub fn AppRouter(locale: Locale, library: &'static Library) -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    let page = Memo::new(move |_| Page::from(&route.get()));
    let tab = Signal::derive(move || match route.get() {
        AppRoute::Sheet { tab, .. } => tab,
        _ => None,
    });

    // New page starts at the top
    Effect::new(move |prev: Option<Page>| {
        let current = page.get();
        if prev.is_some_and(|p| p != current) {
            scroll_to_top();
        }
        current
    });

    view! {
        <div class=css::layout>
            <Navbar locale=locale route=route_memo />
            <main class=css::main>
                {move || match page.get() {
                    Page::Home => view! { <HomePage locale=locale library=library /> }.into_any(),
                    Page::Catalog => {
                        view! { <CatalogPage locale=locale library=library /> }.into_any()
                    }
                    Page::Sheet(id) => match library.get(&id) {
                        Some(sheet) => {
                            view! { <SheetPage locale=locale sheet=sheet tab=tab /> }.into_any()
                        }
                        None => view! { <NotFoundPage locale=locale /> }.into_any(),
                    },
                    Page::About => view! { <AboutPage locale=locale /> }.into_any(),
                    Page::NotFound => view! { <NotFoundPage locale=locale /> }.into_any(),
                }}
            </main>
            <Footer locale=locale />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ignores_tab() {
        let a = AppRoute::from_hash("#/categories/c/printf");
        let b = AppRoute::from_hash("#/categories/c/types");
        assert_eq!(Page::from(&a), Page::from(&b));
        assert_ne!(Page::from(&a), Page::from(&AppRoute::sheet("cpp")));
        assert_eq!(Page::from(&AppRoute::from_hash("#/x")), Page::NotFound);
    }
}
