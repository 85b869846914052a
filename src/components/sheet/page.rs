use leptos::prelude::*;
use leptos_icons::Icon;
use raccourcis_core::{keys, Entry, Group, Layout, Sheet};

use super::accordion::Accordion;
use super::tabs::Tabs;
use crate::components::icons as ic;
use crate::components::search::SearchInput;
use crate::core::Locale;

stylance::import_crate_style!(css, "src/components/sheet/sheet.module.css");

/// Groups visible for the current query and language.
pub type Groups = Memo<Vec<Group<'static, Entry>>>;

#[component]
pub fn SheetPage(
    locale: Locale,
    sheet: &'static Sheet,
    /// Tab requested by the URL; only meaningful for the tabs layout.
    tab: Signal<Option<String>>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let groups: Groups = Memo::new(move |_| sheet.search(&query.get(), locale.lang()));

    view! {
        <section class=css::page>
            <header class=css::header>
                <span class=css::icon><Icon icon=ic::sheet_icon(&sheet.icon) /></span>
                <h1 class=css::title>{move || locale.text(&sheet.title)}</h1>
                <p class=css::subtitle>{move || locale.text(&sheet.subtitle)}</p>
            </header>

            <SearchInput
                query=query
                placeholder=Signal::derive(move || locale.t(keys::SEARCH_PLACEHOLDER))
            />

            <Show
                when=move || !groups.with(Vec::is_empty)
                fallback=move || view! {
                    <p class=css::empty>{move || locale.t(keys::SEARCH_NO_RESULTS)}</p>
                }
            >
                {match sheet.layout {
                    Layout::Accordion => {
                        view! { <Accordion locale=locale sheet=sheet groups=groups /> }.into_any()
                    }
                    Layout::Tabs => {
                        view! { <Tabs locale=locale sheet=sheet groups=groups tab=tab /> }
                            .into_any()
                    }
                }}
            </Show>

            <Show when=move || sheet.layout == Layout::Tabs>
                <aside class=css::tip>
                    <span class=css::tipIcon><Icon icon=ic::TIP /></span>
                    <div>
                        <strong>{move || locale.t(keys::SEARCH_TIP)}</strong>
                        <p>{move || locale.t(keys::SEARCH_TIP_DETAIL)}</p>
                    </div>
                </aside>
            </Show>
        </section>
    }
}
