//! Sheet page: header, search and the grouped entries.
//!
//! - [`SheetPage`] - page shell, owns the query
//! - `accordion` / `tabs` - the two layouts
//! - `entry` - card and table renderings of entries

mod accordion;
mod entry;
mod page;
mod tabs;

pub use page::SheetPage;
