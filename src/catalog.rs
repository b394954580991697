// 🗂️ Product Catalog - Catalog as Data
// Ordered (name, category) records loaded from JSON or CSV

use anyhow::{bail, Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

// ============================================================================
// CATEGORY
// ============================================================================

/// Tax category of a catalog product.
///
/// Books, medical and food products are exempt from the base 10% sales tax.
/// Every other category string maps to `Other` and is taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Books,
    Medical,
    Food,
    Other,
}

impl Category {
    /// Map raw catalog text to a category tag (case-insensitive).
    ///
    /// Returns `None` for empty or whitespace-only values. An absent
    /// category is routed through the exempt-style rate branch (import
    /// surcharge only), which is not how `Other` behaves, so it must not
    /// collapse into `Other` here.
    pub fn from_raw(raw: &str) -> Option<Category> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "books" => Category::Books,
            "medical" => Category::Medical,
            "food" => Category::Food,
            _ => Category::Other,
        })
    }

    /// Human-readable name for display
    pub fn name(&self) -> &str {
        match self {
            Category::Books => "Books",
            Category::Medical => "Medical",
            Category::Food => "Food",
            Category::Other => "Other",
        }
    }

    /// Exempt categories skip the base sales tax (the import surcharge
    /// still applies on top of ×1.00).
    pub fn is_exempt(&self) -> bool {
        matches!(self, Category::Books | Category::Medical | Category::Food)
    }
}

// ============================================================================
// CATALOG ENTRY
// ============================================================================

/// Raw record shape shared by the JSON and CSV loaders.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEntry {
    name: String,

    /// Missing in the source data = empty string = absent category.
    #[serde(default)]
    category: String,
}

/// One catalog product: a name matched case-insensitively against the full
/// purchase description, and its tax category.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: String,

    /// `None` when the source record had no category (or an empty one).
    pub category: Option<Category>,

    /// Original category text, kept for diagnostics.
    pub raw_category: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, raw_category: impl Into<String>) -> Self {
        let raw_category = raw_category.into();
        CatalogEntry {
            name: name.into(),
            category: Category::from_raw(&raw_category),
            raw_category,
        }
    }
}

impl From<RawEntry> for CatalogEntry {
    fn from(raw: RawEntry) -> Self {
        CatalogEntry::new(raw.name, raw.category)
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered product catalog. Lookup is first-match-wins by case-insensitive
/// exact equality between the full joined description and the entry name.
/// No partial or fuzzy matching.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Catalog { entries: Vec::new() }
    }

    /// Create a catalog from a list of entries, preserving order
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Catalog { entries }
    }

    /// Load a catalog from a file, dispatching on the extension
    /// (`.json` or `.csv`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::from_csv_file(path),
            _ => bail!("Unsupported catalog format: {:?} (expected .json or .csv)", path),
        }
    }

    /// Load catalog from a JSON file (array of {name, category} objects)
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: Vec<RawEntry> =
            serde_json::from_str(content).context("Failed to parse catalog JSON")?;
        Ok(Catalog::from_entries(raw.into_iter().map(Into::into).collect()))
    }

    /// Load catalog from a headered CSV file (name,category columns)
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let rdr = csv::Reader::from_path(path.as_ref())
            .with_context(|| format!("Failed to open catalog file: {:?}", path.as_ref()))?;
        Self::from_csv_reader(rdr)
    }

    /// Parse a catalog from any CSV source (used by tests with in-memory data)
    pub fn from_csv_reader<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let mut entries = Vec::new();
        for result in rdr.deserialize() {
            let raw: RawEntry = result.context("Failed to deserialize catalog record")?;
            entries.push(raw.into());
        }
        Ok(Catalog::from_entries(entries))
    }

    /// Append a single entry at the end of the scan order
    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// First-match-wins lookup of a full purchase description.
    pub fn find(&self, description: &str) -> Option<&CatalogEntry> {
        let description = description.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == description)
    }

    /// All entries in scan order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
