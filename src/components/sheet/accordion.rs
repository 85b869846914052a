//! Single-open collapsible sections, one per category.

use leptos::prelude::*;
use leptos_icons::Icon;
use raccourcis_core::{active_tab, Entry, Group, Sheet};

use super::entry::GroupBody;
use super::page::Groups;
use crate::components::icons as ic;
use crate::core::Locale;

stylance::import_crate_style!(css, "src/components/sheet/sheet.module.css");

#[component]
pub fn Accordion(locale: Locale, sheet: &'static Sheet, groups: Groups) -> impl IntoView {
    // First group starts open; `None` means everything is collapsed
    let open = RwSignal::new(groups.with_untracked(|g| active_tab(g, None).map(str::to_string)));

    // An open section filtered away hands over to the first visible one
    Effect::new(move |_| {
        let visible = groups.get();
        if let Some(id) = open.get_untracked()
            && !visible.iter().any(|g| g.category.id == id)
        {
            open.set(active_tab(&visible, None).map(str::to_string));
        }
    });

    view! {
        <div class=css::accordion>
            {move || {
                groups
                    .get()
                    .into_iter()
                    .map(|group| view! { <Section locale=locale sheet=sheet group=group open=open /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Section(
    locale: Locale,
    sheet: &'static Sheet,
    group: Group<'static, Entry>,
    open: RwSignal<Option<String>>,
) -> impl IntoView {
    let category = group.category;
    let count = group.len();
    let is_open = Memo::new(move |_| open.get().as_deref() == Some(category.id.as_str()));
    let toggle = move |_| {
        open.update(|current| {
            *current = if current.as_deref() == Some(category.id.as_str()) {
                None
            } else {
                Some(category.id.clone())
            };
        })
    };

    view! {
        <section class=css::section>
            <button
                class=css::sectionHeader
                aria-expanded=move || is_open.get().to_string()
                on:click=toggle
            >
                {category.icon.as_deref().map(|icon| view! { <span class=css::emoji>{icon}</span> })}
                <span class=css::sectionTitle>{move || locale.text(&category.title)}</span>
                <span class=css::count>{count}</span>
                <span class=move || if is_open.get() { css::chevronOpen } else { css::chevron }>
                    <Icon icon=ic::CHEVRON_DOWN />
                </span>
            </button>
            <Show when=move || is_open.get()>
                <GroupBody locale=locale group=group.clone() syntax=sheet.syntax.as_deref() />
            </Show>
        </section>
    }
}
