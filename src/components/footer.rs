//! Site footer.

use leptos::prelude::*;
use leptos_icons::Icon;
use raccourcis_core::keys;

use crate::components::icons as ic;
use crate::config::{APP_NAME, REPOSITORY_URL};
use crate::core::Locale;
use crate::utils::dom::current_year;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer(locale: Locale) -> impl IntoView {
    let year = current_year();

    view! {
        <footer class=css::footer>
            <div class=css::container>
                <div class=css::brand>
                    <Icon icon=ic::BRAND />
                    <span>{APP_NAME}</span>
                </div>
                <p class=css::rights>
                    {move || format!("© {year} {APP_NAME}. {}", locale.t(keys::FOOTER_RIGHTS))}
                </p>
                <a
                    href=REPOSITORY_URL
                    class=css::repo
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub"
                >
                    <Icon icon=ic::GITHUB />
                </a>
            </div>
        </footer>
    }
}
