//! Entry renderings: a card grid, or a table for `view = "table"` categories.

use leptos::prelude::*;
use raccourcis_core::{keys, CategoryView, Entry, Group, Origin};

use crate::components::code_block::CodeBlock;
use crate::core::Locale;

stylance::import_crate_style!(css, "src/components/sheet/entry.module.css");

/// Badge label for where a function comes from.
fn origin_badge(origin: Origin<'_>) -> String {
    match origin {
        Origin::Header(name) => format!("#include <{name}>"),
        Origin::Namespace(name) => format!("using {name};"),
        Origin::Module(name) => format!("import {name}"),
        Origin::Package(name) => format!("import {name}.*;"),
    }
}

#[component]
pub fn GroupBody(
    locale: Locale,
    group: Group<'static, Entry>,
    syntax: Option<&'static str>,
) -> impl IntoView {
    match group.category.view {
        CategoryView::Table => view! { <EntryTable locale=locale entries=group.entries /> }.into_any(),
        CategoryView::Cards => view! {
            <div class=css::grid>
                {group
                    .entries
                    .into_iter()
                    .map(|entry| view! { <EntryCard locale=locale entry=entry syntax=syntax /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn EntryCard(locale: Locale, entry: &'static Entry, syntax: Option<&'static str>) -> impl IntoView {
    view! {
        <article class=css::card>
            <header class=css::cardHeader>
                <code class=css::label>{entry.label.as_str()}</code>
                <div class=css::badges>
                    {entry.mode.map(|mode| view! { <span class=css::mode>{mode.as_str()}</span> })}
                    {entry.group.as_deref().map(|group| view! {
                        <span class=css::badge>{group}</span>
                    })}
                    {entry.size.as_deref().map(|size| view! {
                        <span class=css::badge>{size}</span>
                    })}
                </div>
            </header>
            {entry.origin().map(|origin| view! {
                <code class=css::origin>{origin_badge(origin)}</code>
            })}
            {move || entry.description(locale.lang()).map(|description| view! {
                <p class=css::description>{description}</p>
            })}
            {move || entry.range(locale.lang()).map(|range| view! {
                <p class=css::range>{range}</p>
            })}
            {entry.example.as_deref().map(|example| match syntax {
                Some(language) => view! { <CodeBlock code=example language=language /> }.into_any(),
                None => view! { <CodeBlock code=example /> }.into_any(),
            })}
        </article>
    }
}

/// Type / size / range / example columns.
#[component]
fn EntryTable(locale: Locale, entries: Vec<&'static Entry>) -> impl IntoView {
    view! {
        <div class=css::tableWrap>
            <table class=css::table>
                <thead>
                    <tr>
                        <th>{move || locale.t(keys::TABLE_TYPE)}</th>
                        <th>{move || locale.t(keys::TABLE_SIZE)}</th>
                        <th>{move || locale.t(keys::TABLE_RANGE)}</th>
                        <th>{move || locale.t(keys::TABLE_EXAMPLE)}</th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .into_iter()
                        .map(|entry| view! {
                            <tr>
                                <td>
                                    <code class=css::label>{entry.label.as_str()}</code>
                                    {move || entry.description(locale.lang()).map(|d| view! {
                                        <p class=css::description>{d}</p>
                                    })}
                                </td>
                                <td>{entry.size.as_deref().unwrap_or("")}</td>
                                <td>{move || entry.range(locale.lang()).unwrap_or("")}</td>
                                <td><code>{entry.example.as_deref().unwrap_or("")}</code></td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
