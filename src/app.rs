//! Root application module.
//!
//! Loads the bundled content, sets up the display language and wraps the
//! router in an error boundary.

use leptos::prelude::*;
use raccourcis_core::{keys, Library, TranslationTable};

use crate::components::AppRouter;
use crate::core::Locale;
use crate::utils::dom::set_document_lang;

/// Used when the bundled table fails to parse; every key then shows as itself.
static EMPTY_TABLE: TranslationTable = TranslationTable::new();

/// Root application component with error boundary.
///
/// This component:
/// - Resolves the initial language into a [`Locale`]
/// - Surfaces malformed bundled content through the ErrorBoundary
/// - Renders the router with the loaded library
#[component]
pub fn App() -> impl IntoView {
    let table = TranslationTable::bundled().unwrap_or_else(|err| {
        web_sys::console::error_1(&err.to_string().into());
        &EMPTY_TABLE
    });
    let locale = Locale::init(table);
    Effect::new(move |_| set_document_lang(locale.lang().code()));
    let content = TranslationTable::bundled().and_then(|_| Library::bundled());

    view! {
        <ErrorBoundary
            fallback=move |errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: var(--bg);
                    color: var(--fg);
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: var(--danger); margin-bottom: 1rem;">
                            {move || locale.t(keys::ERROR_TITLE)}
                        </h1>
                        <p style="color: var(--muted); margin-bottom: 2rem;">
                            {move || locale.t(keys::ERROR_BODY)}
                        </p>
                        <details style="
                            text-align: left;
                            background: var(--surface);
                            padding: 1rem;
                            border-radius: 0.5rem;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: var(--muted);">
                                {move || locale.t(keys::ERROR_DETAILS)}
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: var(--danger);
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: var(--primary);
                                color: var(--primary-fg);
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 0.5rem;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            {move || locale.t(keys::ERROR_RELOAD)}
                        </button>
                    </div>
                </div>
            }
        >
            {content.clone().map(|library| view! { <AppRouter locale=locale library=library /> })}
        </ErrorBoundary>
    }
}
