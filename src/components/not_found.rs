use leptos::prelude::*;
use leptos_icons::Icon;
use raccourcis_core::keys;

use crate::components::icons as ic;
use crate::core::Locale;

stylance::import_crate_style!(css, "src/components/pages.module.css");

#[component]
pub fn NotFoundPage(locale: Locale) -> impl IntoView {
    view! {
        <section class=css::notFound>
            <span class=css::notFoundIcon><Icon icon=ic::WARNING /></span>
            <h1 class=css::title>"404"</h1>
            <h2>{move || locale.t(keys::NOT_FOUND_TITLE)}</h2>
            <p class=css::subtitle>{move || locale.t(keys::NOT_FOUND_BODY)}</p>
            <a href="#/" class=css::button>
                <Icon icon=ic::HOME />
                <span>{move || locale.t(keys::NOT_FOUND_BACK)}</span>
            </a>
        </section>
    }
}
