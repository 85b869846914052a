//! Code sample with a language tag and a copy button.

use std::time::Duration;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::COPY_FEEDBACK_MS;
use crate::utils::dom::copy_to_clipboard;

stylance::import_crate_style!(css, "src/components/code_block.module.css");

/// Human-readable name for a syntax tag.
pub fn language_name(tag: &str) -> &str {
    match tag {
        "c" => "C",
        "cpp" => "C++",
        "csharp" => "C#",
        "java" => "Java",
        "python" => "Python",
        "bash" => "Bash",
        "sh" => "Shell",
        "makefile" => "Makefile",
        "nasm" => "NASM",
        other => other,
    }
}

#[component]
pub fn CodeBlock(code: &'static str, #[prop(optional)] language: Option<&'static str>) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let code_class = language
        .map(|tag| format!("language-{tag}"))
        .unwrap_or_default();

    let on_copy = move |_| {
        copy_to_clipboard(code);
        set_copied.set(true);
        set_timeout(
            move || set_copied.set(false),
            Duration::from_millis(COPY_FEEDBACK_MS),
        );
    };

    view! {
        <div class=css::block>
            <div class=css::toolbar>
                {language.map(|tag| view! { <span class=css::language>{language_name(tag)}</span> })}
                <button class=css::copy aria-label="Copy" on:click=on_copy>
                    {move || {
                        let icon = if copied.get() { ic::CHECK } else { ic::COPY };
                        view! { <Icon icon=icon /> }
                    }}
                </button>
            </div>
            <pre class=css::pre>
                <code class=code_class>{code}</code>
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("cpp"), "C++");
        assert_eq!(language_name("csharp"), "C#");
        assert_eq!(language_name("rust"), "rust");
    }
}
