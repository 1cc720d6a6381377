//! Resource records held by the catalog.
//!
//! Books, journals and digital items share one record type; the kind of
//! resource is carried by its [`Category`] tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::CatalogError;

/// Kind of library resource
///
/// Ordering follows the label ("Book" < "Digital" < "Journal"), which is
/// the order report groups are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Printed book
    Book,

    /// Periodical / journal
    Journal,

    /// Digital resource (e-book, online material)
    Digital,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 3] = [Category::Book, Category::Digital, Category::Journal];

    /// Display label, also used as the report group heading
    pub fn label(self) -> &'static str {
        match self {
            Category::Book => "Book",
            Category::Journal => "Journal",
            Category::Digital => "Digital",
        }
    }

    /// Map a selection code ('B', 'J' or 'D') to a category
    pub fn from_code(code: char) -> Result<Self, CatalogError> {
        match code {
            'B' => Ok(Category::Book),
            'J' => Ok(Category::Journal),
            'D' => Ok(Category::Digital),
            other => Err(CatalogError::InvalidCategory(other.to_string())),
        }
    }

    /// Acknowledgement shown after a resource of this kind is added
    pub fn added_message(self) -> &'static str {
        match self {
            Category::Book => "Book added successfully.",
            Category::Journal => "Journal added successfully.",
            Category::Digital => "Digital resource added successfully.",
        }
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.label().cmp(other.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Self::from_code(code);
        }

        match trimmed.to_lowercase().as_str() {
            "book" => Ok(Category::Book),
            "journal" => Ok(Category::Journal),
            "digital" => Ok(Category::Digital),
            _ => Err(CatalogError::InvalidCategory(s.to_string())),
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    title: String,
    author: String,

    /// Catalog number, shown as "ISBN". Not validated and not unique.
    #[serde(rename = "isbn")]
    identifier: String,

    #[serde(rename = "type")]
    category: Category,
}

impl ResourceRecord {
    /// Create a new record. Any strings are accepted, including empty ones.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        identifier: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            identifier: identifier.into(),
            category,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Human-readable one-line rendering of all four fields
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Type: {}",
            self.title, self.author, self.identifier, self.category
        )
    }
}
