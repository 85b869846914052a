//! Application configuration.
//!
//! Centralizes the constants used throughout the front-end.
//! Text assets are loaded at compile time using `include_str!`.

use raccourcis_core::Lang;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// About page body, English.
pub const ABOUT_EN: &str = include_str!("../assets/text/about.en.md");

/// About page body, French.
pub const ABOUT_FR: &str = include_str!("../assets/text/about.fr.md");

/// About page markdown for `lang`.
pub const fn about_markdown(lang: Lang) -> &'static str {
    match lang {
        Lang::En => ABOUT_EN,
        Lang::Fr => ABOUT_FR,
    }
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the navbar and footer.
pub const APP_NAME: &str = "Raccourcis";

/// Source repository linked from the footer.
pub const REPOSITORY_URL: &str = "https://github.com";

/// Sheet linked directly from the navbar.
pub const NAV_SHEET: &str = "vim";

// =============================================================================
// Language
// =============================================================================

/// localStorage key holding the chosen display language.
pub const LANG_STORAGE_KEY: &str = "raccourcis.lang";

/// Language forced for every visitor, overriding stored and browser choices.
pub const FORCED_LANG: Option<Lang> = None;

/// Language used when neither storage nor the browser names a supported one.
pub const FALLBACK_LANG: Lang = Lang::Fr;

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewport width below which the navbar collapses into a menu.
pub const MOBILE_QUERY: &str = "(max-width: 767px)";

/// How long the "copied" state of a code block lasts.
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
