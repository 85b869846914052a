//! One tab per non-empty category.
//!
//! The selected tab lives in the URL (`#/categories/<sheet>/<tab>`) and falls
//! back to the first visible tab when the search hides it.

use leptos::prelude::*;
use raccourcis_core::{active_tab, Sheet};

use super::entry::GroupBody;
use super::page::Groups;
use crate::core::Locale;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/sheet/sheet.module.css");

#[component]
pub fn Tabs(
    locale: Locale,
    sheet: &'static Sheet,
    groups: Groups,
    tab: Signal<Option<String>>,
) -> impl IntoView {
    let active = Memo::new(move |_| {
        let requested = tab.get();
        groups.with(|g| active_tab(g, requested.as_deref()).map(str::to_string))
    });

    let select = move |id: &str| {
        AppRoute::Sheet {
            id: sheet.id.clone(),
            tab: Some(id.to_string()),
        }
        .push();
    };

    view! {
        <div class=css::tabs>
            <div class=css::tabList role="tablist">
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|group| {
                            let category = group.category;
                            let selected = move || active.get().as_deref() == Some(category.id.as_str());
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || selected().to_string()
                                    class=move || if selected() { css::tabActive } else { css::tab }
                                    on:click=move |_| select(&category.id)
                                >
                                    {category.icon.as_deref().map(|icon| view! {
                                        <span class=css::emoji>{icon}</span>
                                    })}
                                    <span>{move || locale.text(&category.title)}</span>
                                    <span class=css::count>{group.len()}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class=css::tabPanel role="tabpanel">
                {move || {
                    let active = active.get();
                    groups
                        .get()
                        .into_iter()
                        .find(|g| active.as_deref() == Some(g.category.id.as_str()))
                        .map(|group| view! {
                            <GroupBody locale=locale group=group syntax=sheet.syntax.as_deref() />
                        })
                }}
            </div>
        </div>
    }
}
