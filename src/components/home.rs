use leptos::prelude::*;
use leptos_icons::Icon;
use raccourcis_core::{keys, Library};

use crate::components::icons as ic;
use crate::components::sheet_card::SheetCard;
use crate::config::APP_NAME;
use crate::core::Locale;

stylance::import_crate_style!(css, "src/components/pages.module.css");

/// Landing page: hero and one card per featured sheet.
#[component]
pub fn HomePage(locale: Locale, library: &'static Library) -> impl IntoView {
    view! {
        <section class=css::page>
            <header class=css::hero>
                <span class=css::heroIcon><Icon icon=ic::BRAND /></span>
                <h1 class=css::brandTitle>{APP_NAME}</h1>
                <p class=css::tagline>{move || locale.t(keys::HOME_TAGLINE)}</p>
                <p class=css::subtitle>{move || locale.t(keys::HOME_SUBTITLE)}</p>
            </header>
            <div class=css::grid>
                {library
                    .featured()
                    .map(|sheet| view! { <SheetCard locale=locale sheet=sheet /> })
                    .collect_view()}
            </div>
        </section>
    }
}
