//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`navbar`], [`footer`] - Page chrome
//! - [`home`], [`catalog`], [`sheet`], [`about`], [`not_found`] - Pages
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`code_block`], [`search`], [`sheet_card`] - Shared widgets

pub mod about;
pub mod catalog;
pub mod code_block;
pub mod footer;
pub mod home;
pub mod icons;
pub mod navbar;
pub mod not_found;
pub mod router;
pub mod search;
pub mod sheet;
pub mod sheet_card;

pub use router::AppRouter;
