//! Translation keys used by the interface chrome.
//!
//! Every key listed in [`ALL`] must exist in the bundled translation table;
//! [`crate::validate::validate_translations`] checks this.

pub const NAV_HOME: &str = "nav.home";
pub const NAV_CATEGORIES: &str = "nav.categories";
pub const NAV_VIM: &str = "nav.vim";
pub const NAV_ABOUT: &str = "nav.about";
pub const NAV_LANGUAGE: &str = "nav.language";
pub const NAV_MENU_OPEN: &str = "nav.menu.open";
pub const NAV_MENU_CLOSE: &str = "nav.menu.close";

pub const HOME_TAGLINE: &str = "home.tagline";
pub const HOME_SUBTITLE: &str = "home.subtitle";
pub const HOME_EXPLORE: &str = "home.explore";

pub const CATALOG_TITLE: &str = "catalog.title";
pub const CATALOG_SUBTITLE: &str = "catalog.subtitle";
pub const CATALOG_SEARCH_PLACEHOLDER: &str = "catalog.search.placeholder";
pub const CATALOG_MATCHES: &str = "catalog.matches";
pub const CATALOG_NO_RESULTS: &str = "catalog.no_results";

pub const SEARCH_PLACEHOLDER: &str = "search.placeholder";
pub const SEARCH_NO_RESULTS: &str = "search.no_results";
pub const SEARCH_TIP: &str = "search.tip";
pub const SEARCH_TIP_DETAIL: &str = "search.tip.detail";

pub const TABLE_TYPE: &str = "table.type";
pub const TABLE_SIZE: &str = "table.size";
pub const TABLE_RANGE: &str = "table.range";
pub const TABLE_EXAMPLE: &str = "table.example";

pub const ABOUT_TITLE: &str = "about.title";

pub const NOT_FOUND_TITLE: &str = "not_found.title";
pub const NOT_FOUND_BODY: &str = "not_found.body";
pub const NOT_FOUND_BACK: &str = "not_found.back";

pub const FOOTER_RIGHTS: &str = "footer.rights";

pub const ERROR_TITLE: &str = "error.title";
pub const ERROR_BODY: &str = "error.body";
pub const ERROR_DETAILS: &str = "error.details";
pub const ERROR_RELOAD: &str = "error.reload";

/// All interface keys.
pub const ALL: &[&str] = &[
    NAV_HOME,
    NAV_CATEGORIES,
    NAV_VIM,
    NAV_ABOUT,
    NAV_LANGUAGE,
    NAV_MENU_OPEN,
    NAV_MENU_CLOSE,
    HOME_TAGLINE,
    HOME_SUBTITLE,
    HOME_EXPLORE,
    CATALOG_TITLE,
    CATALOG_SUBTITLE,
    CATALOG_SEARCH_PLACEHOLDER,
    CATALOG_MATCHES,
    CATALOG_NO_RESULTS,
    SEARCH_PLACEHOLDER,
    SEARCH_NO_RESULTS,
    SEARCH_TIP,
    SEARCH_TIP_DETAIL,
    TABLE_TYPE,
    TABLE_SIZE,
    TABLE_RANGE,
    TABLE_EXAMPLE,
    ABOUT_TITLE,
    NOT_FOUND_TITLE,
    NOT_FOUND_BODY,
    NOT_FOUND_BACK,
    FOOTER_RIGHTS,
    ERROR_TITLE,
    ERROR_BODY,
    ERROR_DETAILS,
    ERROR_RELOAD,
];
