//! Top navigation bar.
//!
//! Brand, page links with an active state, the language selector and, below
//! the mobile breakpoint, a collapsible menu.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use raccourcis_core::{keys, Lang};

use crate::components::icons as ic;
use crate::config::{APP_NAME, MOBILE_QUERY, NAV_SHEET};
use crate::core::Locale;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/navbar.module.css");

/// Navbar links in display order.
fn nav_items() -> [(&'static str, AppRoute); 4] {
    [
        (keys::NAV_HOME, AppRoute::Home),
        (keys::NAV_CATEGORIES, AppRoute::Catalog),
        (keys::NAV_VIM, AppRoute::sheet(NAV_SHEET)),
        (keys::NAV_ABOUT, AppRoute::About),
    ]
}

#[component]
pub fn Navbar(locale: Locale, route: Memo<AppRoute>) -> impl IntoView {
    let is_mobile = use_media_query(MOBILE_QUERY);
    let (menu_open, set_menu_open) = signal(false);

    // Leaving the mobile layout closes the menu
    Effect::new(move |_| {
        if !is_mobile.get() {
            set_menu_open.set(false);
        }
    });

    view! {
        <header class=css::navbar>
            <div class=css::container>
                <a href="#/" class=css::brand>
                    <Icon icon=ic::BRAND />
                    <span>{APP_NAME}</span>
                </a>

                <Show when=move || !is_mobile.get()>
                    <nav class=css::links>
                        <NavLinks locale=locale route=route on_select=Callback::new(|_| {}) />
                    </nav>
                </Show>

                <div class=css::actions>
                    <LanguageSelector locale=locale />
                    <Show when=move || is_mobile.get()>
                        <button
                            class=css::menuToggle
                            aria-label=move || {
                                if menu_open.get() {
                                    locale.t(keys::NAV_MENU_CLOSE)
                                } else {
                                    locale.t(keys::NAV_MENU_OPEN)
                                }
                            }
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                let icon = if menu_open.get() { ic::CLOSE } else { ic::MENU };
                                view! { <Icon icon=icon /> }
                            }}
                        </button>
                    </Show>
                </div>
            </div>

            <Show when=move || is_mobile.get() && menu_open.get()>
                <nav class=css::mobileMenu>
                    <NavLinks
                        locale=locale
                        route=route
                        on_select=Callback::new(move |_| set_menu_open.set(false))
                    />
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn NavLinks(locale: Locale, route: Memo<AppRoute>, on_select: Callback<()>) -> impl IntoView {
    nav_items()
        .into_iter()
        .map(|(key, target)| {
            let href = target.to_hash();
            let is_active = Memo::new(move |_| target.is_active(&route.get()));
            view! {
                <a
                    href=href
                    class=move || if is_active.get() { css::linkActive } else { css::link }
                    aria-current=move || is_active.get().then_some("page")
                    on:click=move |_| on_select.run(())
                >
                    {move || locale.t(key)}
                </a>
            }
        })
        .collect_view()
}

/// Dropdown listing every language by its native name, current one checked.
#[component]
fn LanguageSelector(locale: Locale) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class=css::language>
            <button
                class=css::languageButton
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                title=move || locale.t(keys::NAV_LANGUAGE)
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <Icon icon=ic::LANGUAGE />
                <span class=css::languageCode>{move || locale.lang().code().to_uppercase()}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>
            <Show when=move || open.get()>
                <ul class=css::languageMenu role="listbox">
                    {Lang::ALL
                        .into_iter()
                        .map(|lang| {
                            let selected = move || locale.lang() == lang;
                            view! {
                                <li
                                    role="option"
                                    aria-selected=move || selected().to_string()
                                    class=css::languageOption
                                    on:click=move |_| {
                                        locale.set(lang);
                                        set_open.set(false);
                                    }
                                >
                                    <span>{lang.native_name()}</span>
                                    <Show when=selected>
                                        <Icon icon=ic::CHECK />
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
