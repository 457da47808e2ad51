// 🔎 Filter Engine - pure functions over the loaded catalog
//
// Nothing here mutates or performs I/O. Every function keeps catalog order and
// hands back borrowed records.

use crate::record::Record;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Keywords that place a character in the "other world".
/// Matched as lowercase substrings of the name or title.
pub const OTHER_WORLD_KEYWORDS: &[&str] = &[
    "outro",
    "outra",
    "fantasma",
    "beldam",
    "fantoche",
    "ratos saltadores",
    "a mão separada",
];

// ============================================================================
// TEXT SEARCH
// ============================================================================

/// Free-text search over name, description and title.
///
/// A blank term returns nothing rather than everything. That mirrors the
/// behaviour users already know and is kept until product decides otherwise.
pub fn filter_by_text<'a>(catalog: &'a [Record], term: &str) -> Vec<&'a Record> {
    let term = normalize_term(term);
    if term.is_empty() {
        return Vec::new();
    }

    let found: Vec<&Record> = catalog
        .iter()
        .filter(|record| matches_text(record, &term))
        .collect();

    debug!(term = %term, matches = found.len(), "text filter");
    found
}

/// Lowercase and trim a search term the same way the filter does
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase().trim().to_string()
}

/// `term` must already be normalized
fn matches_text(record: &Record, term: &str) -> bool {
    record.name.to_lowercase().contains(term)
        || record.description.to_lowercase().contains(term)
        || record.title.to_lowercase().contains(term)
}

// ============================================================================
// CATEGORY PARTITION
// ============================================================================

/// True when any keyword occurs in the lowercased name or title
pub fn matches_keywords(record: &Record, keywords: &[&str]) -> bool {
    let name = record.name.to_lowercase();
    let title = record.title.to_lowercase();
    keywords
        .iter()
        .any(|keyword| name.contains(keyword) || title.contains(keyword))
}

/// Split the catalog on keyword membership.
///
/// `want_match = true` keeps matching records, `false` keeps the rest. Both
/// buckets come from the same predicate, so together they cover the catalog
/// exactly once.
pub fn filter_by_category<'a>(
    catalog: &'a [Record],
    keywords: &[&str],
    want_match: bool,
) -> Vec<&'a Record> {
    let found: Vec<&Record> = catalog
        .iter()
        .filter(|record| matches_keywords(record, keywords) == want_match)
        .collect();

    debug!(want_match, matches = found.len(), "category filter");
    found
}

/// The two buckets a character can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    RealWorld,
    OtherWorld,
}

impl Category {
    /// Classify a record with the built-in keyword set
    pub fn of(record: &Record) -> Self {
        if matches_keywords(record, OTHER_WORLD_KEYWORDS) {
            Category::OtherWorld
        } else {
            Category::RealWorld
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::RealWorld => "real-world",
            Category::OtherWorld => "other-world",
        }
    }

    /// Heading used by the front ends
    pub fn label(&self) -> &'static str {
        match self {
            Category::RealWorld => "Mundo Real",
            Category::OtherWorld => "Outro Mundo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "real-world" | "real" | "mundo-real" => Ok(Category::RealWorld),
            "other-world" | "other" | "outro-mundo" => Ok(Category::OtherWorld),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// Records of one category, using the built-in keyword set
pub fn filter_category(catalog: &[Record], category: Category) -> Vec<&Record> {
    filter_by_category(
        catalog,
        OTHER_WORLD_KEYWORDS,
        category == Category::OtherWorld,
    )
}

// ============================================================================
// TESTS
// ============================================================================
