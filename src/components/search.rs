//! Search box bound to a query signal.
//!
//! The query lives only as long as the owning page; it is never persisted.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/search.module.css");

#[component]
pub fn SearchInput(query: RwSignal<String>, placeholder: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class=css::search>
            <span class=css::icon><Icon icon=ic::SEARCH /></span>
            <input
                type="search"
                class=css::input
                placeholder=move || placeholder.get()
                aria-label=move || placeholder.get()
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !query.get().is_empty()>
                <button class=css::clear aria-label="Clear" on:click=move |_| query.set(String::new())>
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
        </div>
    }
}
