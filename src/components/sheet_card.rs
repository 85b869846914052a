//! Link card for one sheet, shared by the home and catalog pages.

use leptos::prelude::*;
use leptos_icons::Icon;
use raccourcis_core::{keys, Sheet};

use crate::components::icons as ic;
use crate::core::Locale;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/sheet_card.module.css");

#[component]
pub fn SheetCard(
    locale: Locale,
    sheet: &'static Sheet,
    /// Match count shown as a badge during a site-wide search.
    #[prop(optional, into)]
    hits: Option<Signal<usize>>,
) -> impl IntoView {
    let href = AppRoute::sheet(&sheet.id).to_hash();

    view! {
        <a href=href class=css::card>
            <div class=css::header>
                <span class=css::icon><Icon icon=ic::sheet_icon(&sheet.icon) /></span>
                <h3 class=css::title>{move || locale.text(&sheet.title)}</h3>
                {hits.map(|hits| view! {
                    <span class=css::badge>
                        {move || format!("{} {}", hits.get(), locale.t(keys::CATALOG_MATCHES))}
                    </span>
                })}
            </div>
            <p class=css::description>{move || locale.text(&sheet.subtitle)}</p>
            <div class=css::footer>
                <span>{move || locale.t(keys::HOME_EXPLORE)}</span>
                <Icon icon=ic::ARROW_RIGHT />
            </div>
        </a>
    }
}
