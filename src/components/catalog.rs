//! Catalog page: every sheet, with a search across all of them.

use leptos::prelude::*;
use raccourcis_core::{keys, Library, SheetHits};

use crate::components::search::SearchInput;
use crate::components::sheet_card::SheetCard;
use crate::core::Locale;

stylance::import_crate_style!(css, "src/components/pages.module.css");

#[component]
pub fn CatalogPage(locale: Locale, library: &'static Library) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let hits = Memo::new(move |_| library.search_all(&query.get(), locale.lang()));
    let searching = move || !query.get().is_empty();

    view! {
        <section class=css::page>
            <header class=css::hero>
                <h1 class=css::title>{move || locale.t(keys::CATALOG_TITLE)}</h1>
                <p class=css::subtitle>{move || locale.t(keys::CATALOG_SUBTITLE)}</p>
            </header>

            <SearchInput
                query=query
                placeholder=Signal::derive(move || locale.t(keys::CATALOG_SEARCH_PLACEHOLDER))
            />

            <Show
                when=move || !hits.get().is_empty()
                fallback=move || view! {
                    <p class=css::empty>{move || locale.t(keys::CATALOG_NO_RESULTS)}</p>
                }
            >
                <div class=css::grid>
                    <For
                        each=move || hits.get()
                        key=|item| item.sheet.id.clone()
                        children={move |item: SheetHits<'static>| {
                            let sheet = item.sheet;
                            let count = Signal::derive(move || {
                                hits.get()
                                    .iter()
                                    .find(|h| h.sheet.id == sheet.id)
                                    .map_or(0, |h| h.count)
                            });
                            view! {
                                <Show
                                    when=searching
                                    fallback=move || view! { <SheetCard locale=locale sheet=sheet /> }
                                >
                                    <SheetCard locale=locale sheet=sheet hits=count />
                                </Show>
                            }
                        }}
                    />
                </div>
            </Show>
        </section>
    }
}
