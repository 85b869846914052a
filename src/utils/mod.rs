//! Browser and rendering helpers.
//!
//! Provides:
//! - [`dom`] - window, storage, clipboard and URL hash access
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
mod markdown;

pub use markdown::markdown_to_html;
