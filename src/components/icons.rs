//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuBookOpen as Book, LuBraces as Braces, LuCheck as Check,
        LuChevronDown as ChevronDown, LuCoffee as Coffee,
        LuCommand as Brand, LuCopy as Copy, LuCpu as Cpu, LuFileCode as FileCode,
        LuFileText as FileText, LuHash as Hash, LuHouse as Home, LuLanguages as Language,
        LuLightbulb as Tip, LuMenu as Menu, LuSearch as Search, LuTerminal as Terminal,
        LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsBook as Book, BsBraces as Braces, BsCheckLg as Check,
        BsChevronDown as ChevronDown, BsClipboard as Copy,
        BsCommand as Brand, BsCpu as Cpu, BsCupHot as Coffee, BsExclamationTriangle as Warning,
        BsFileEarmarkCode as FileCode, BsFileEarmarkText as FileText, BsHash as Hash,
        BsHouseFill as Home, BsLightbulb as Tip, BsList as Menu, BsSearch as Search,
        BsTerminal as Terminal, BsTranslate as Language, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BRAND, Brand);
themed_icon!(HOME, Home);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(LANGUAGE, Language);
themed_icon!(SEARCH, Search);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);
themed_icon!(BOOK, Book);
themed_icon!(TIP, Tip);
themed_icon!(WARNING, Warning);
themed_icon!(TERMINAL, Terminal);
themed_icon!(CPU, Cpu);
themed_icon!(COFFEE, Coffee);
themed_icon!(BRACES, Braces);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(HASH, Hash);
themed_icon!(FILE_TEXT, FileText);

/// Brand icons have no Lucide counterpart.
pub const GITHUB: Icon = icondata::BsGithub;

/// Icon for a sheet's `icon` name; unknown names get a generic document.
pub fn sheet_icon(name: &str) -> Icon {
    match name {
        "terminal" => TERMINAL,
        "cpu" => CPU,
        "coffee" => COFFEE,
        "braces" => BRACES,
        "file-code" => FILE_CODE,
        "hash" => HASH,
        _ => FILE_TEXT,
    }
}
