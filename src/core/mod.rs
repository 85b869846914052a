//! Browser-side state that is not a component.
//!
//! - [`Locale`] - display language handle
//! - [`error::LocaleStorageError`] - language persistence errors

pub mod error;
mod locale;

pub use locale::Locale;
