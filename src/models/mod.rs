//! Front-end data models.
//!
//! - [`AppRoute`] - hash-based navigation

mod route;

pub use route::AppRoute;
