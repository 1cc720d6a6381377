//! Catalog of library resources.
//!
//! Records are kept in insertion order. Identifiers are not required to be
//! unique; lookups that remove a record act on the earliest match.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::resource::{Category, ResourceRecord};

/// Errors reported by catalog operations
///
/// Display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Resource not found.")]
    NotFound { identifier: String },

    #[error("No matching resource found.")]
    NoMatch { field: SearchField, query: String },

    #[error("Invalid resource type selected.")]
    InvalidCategory(String),
}

impl CatalogError {
    /// True for both a missing removal target and an empty search
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. } | CatalogError::NoMatch { .. })
    }
}

/// Record field a search compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Author,
    Identifier,
}

impl SearchField {
    /// Map a selection code ('T', 'A' or 'I') to a field
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'T' => Some(SearchField::Title),
            'A' => Some(SearchField::Author),
            'I' => Some(SearchField::Identifier),
            _ => None,
        }
    }

    fn value_of(self, record: &ResourceRecord) -> &str {
        match self {
            SearchField::Title => record.title(),
            SearchField::Author => record.author(),
            SearchField::Identifier => record.identifier(),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Identifier => write!(f, "isbn"),
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            if let Some(field) = Self::from_code(code.to_ascii_uppercase()) {
                return Ok(field);
            }
        }

        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "isbn" | "identifier" | "id" => Ok(SearchField::Identifier),
            _ => anyhow::bail!("Unknown search field: {}", s),
        }
    }
}

/// Ordered collection of resource records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ResourceRecord>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the catalog
    pub fn add(&mut self, record: ResourceRecord) {
        debug!(
            isbn = record.identifier(),
            category = %record.category(),
            "Adding resource"
        );
        self.records.push(record);
    }

    /// Remove the earliest-inserted record with the given identifier
    pub fn remove_by_identifier(&mut self, identifier: &str) -> Result<ResourceRecord, CatalogError> {
        match self.records.iter().position(|r| r.identifier() == identifier) {
            Some(pos) => {
                debug!(isbn = identifier, position = pos, "Removing resource");
                Ok(self.records.remove(pos))
            }
            None => {
                debug!(isbn = identifier, "No resource to remove");
                Err(CatalogError::NotFound {
                    identifier: identifier.to_string(),
                })
            }
        }
    }

    /// All records whose `field` equals `query` exactly (case-sensitive),
    /// in insertion order
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&ResourceRecord> {
        let matches: Vec<_> = self
            .records
            .iter()
            .filter(|record| field.value_of(record) == query)
            .collect();

        debug!(%field, query, matches = matches.len(), "Searched catalog");
        matches
    }

    /// Like [`Catalog::search`], but an empty result is an error
    pub fn find(&self, query: &str, field: SearchField) -> Result<Vec<&ResourceRecord>, CatalogError> {
        let matches = self.search(query, field);
        if matches.is_empty() {
            return Err(CatalogError::NoMatch {
                field,
                query: query.to_string(),
            });
        }
        Ok(matches)
    }

    /// Group all records by category
    pub fn generate_report(&self) -> Report {
        let mut grouped: BTreeMap<Category, Vec<ResourceRecord>> = BTreeMap::new();
        for record in &self.records {
            grouped
                .entry(record.category())
                .or_default()
                .push(record.clone());
        }

        debug!(groups = grouped.len(), records = self.records.len(), "Generated report");
        Report {
            groups: grouped
                .into_iter()
                .map(|(category, records)| ReportGroup { category, records })
                .collect(),
        }
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ResourceRecord> {
        self.records.iter()
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Extend<ResourceRecord> for Catalog {
    fn extend<I: IntoIterator<Item = ResourceRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl FromIterator<ResourceRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = ResourceRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ResourceRecord;
    type IntoIter = std::slice::Iter<'a, ResourceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Snapshot of the catalog grouped by category
///
/// Groups are in label order; members keep insertion order. Categories
/// without records are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    groups: Vec<ReportGroup>,
}

/// One category heading and its members
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportGroup {
    pub category: Category,
    pub records: Vec<ResourceRecord>,
}

impl Report {
    pub fn groups(&self) -> &[ReportGroup] {
        &self.groups
    }

    /// Members of one category, if it has any
    pub fn group(&self, category: Category) -> Option<&[ResourceRecord]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.records.as_slice())
    }

    /// Total number of records across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{}:", group.category)?;
            for record in &group.records {
                writeln!(f, "{}", record)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
