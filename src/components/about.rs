//! About page, rendered from per-language markdown.

use leptos::prelude::*;
use leptos_icons::Icon;
use raccourcis_core::keys;

use crate::components::icons as ic;
use crate::config::about_markdown;
use crate::core::Locale;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/pages.module.css");

#[component]
pub fn AboutPage(locale: Locale) -> impl IntoView {
    // Re-rendered on language switch only
    let html = Memo::new(move |_| markdown_to_html(about_markdown(locale.lang())));

    view! {
        <section class=css::page>
            <header class=css::hero>
                <span class=css::heroIcon><Icon icon=ic::BOOK /></span>
                <h1 class=css::title>{move || locale.t(keys::ABOUT_TITLE)}</h1>
            </header>
            <article class=css::markdown inner_html=move || html.get() />
        </section>
    }
}
