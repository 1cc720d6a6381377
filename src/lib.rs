//! richfield - in-memory resource catalog for a small library
//!
//! Keeps books, journals and digital resources in one ordered catalog and
//! supports adding, removing by ISBN, exact-match search and a report
//! grouped by resource type.
//!
//! # Modules
//!
//! - `library`: Resource records and the catalog
//! - `config`: Config file discovery and seed resources
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Show the seeded catalog grouped by type
//! richfield report
//!
//! # Search by author
//! richfield search --by author Herbert
//! ```

pub mod cli;
pub mod config;
pub mod library;

// Re-export main types at crate root for convenience
pub use library::{Catalog, CatalogError, Category, Report, ResourceRecord, SearchField};
