//! Resource catalog for the library.
//!
//! The catalog owns every record added to it and is the only thing that
//! mutates them. Nothing here touches the filesystem; catalogs live for as
//! long as their owner keeps them.

pub mod catalog;
pub mod resource;

pub use catalog::{Catalog, CatalogError, Report, ReportGroup, SearchField};
pub use resource::{Category, ResourceRecord};

/// Shown after a successful removal
pub const MSG_REMOVED: &str = "Resource removed successfully.";

/// Shown when no record carries the identifier to remove
pub const MSG_NOT_FOUND: &str = "Resource not found.";

/// Shown when a search matches nothing
pub const MSG_NO_MATCH: &str = "No matching resource found.";

/// Shown when a category selection is outside Book/Journal/Digital
pub const MSG_INVALID_CATEGORY: &str = "Invalid resource type selected.";
