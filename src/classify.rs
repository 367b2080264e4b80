//! Keyword-based product categorization.
//!
//! Categories are matched against a fixed, ordered table of keyword rules.
//! The first rule with a keyword found in the product name wins, so rule
//! order decides ties between categories.

use tracing::trace;

/// Category assigned when no rule matches.
pub const FALLBACK_CATEGORY: &str = "Other";

/// A category and the lowercase keywords that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// The category name.
    pub category: &'static str,
    /// Lowercase substrings that select this category.
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    /// Check if any keyword occurs in an already-lowercased name.
    pub fn matches(&self, lowercase_name: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercase_name.contains(keyword))
    }
}

/// The category rules, in priority order.
pub const CATEGORY_TABLE: &[CategoryRule] = &[
    CategoryRule {
        category: "Cosmetics",
        keywords: &["pulpa", "crema", "corrector", "protector", "bálsamo"],
    },
    CategoryRule {
        category: "Fragrances",
        keywords: &["eau de toilette", "parfum", "esencia"],
    },
    CategoryRule {
        category: "Electronics",
        keywords: &["iphone"],
    },
    CategoryRule {
        category: "Clothing",
        keywords: &["t-shirt", "dress"],
    },
    // Matches none of the sample products.
    CategoryRule {
        category: "Gardening",
        keywords: &["tools"],
    },
];

/// Pick the category for a product name.
///
/// Returns the first category in [`CATEGORY_TABLE`] with a keyword occurring
/// in the lowercased name, or [`FALLBACK_CATEGORY`].
pub fn categorize(name: &str) -> &'static str {
    let lowercase_name = name.to_lowercase();

    let category = CATEGORY_TABLE
        .iter()
        .find(|rule| rule.matches(&lowercase_name))
        .map_or(FALLBACK_CATEGORY, |rule| rule.category);

    trace!(name, category, "Categorized product name");
    category
}

/// Whether `category` is a table category or the fallback.
pub fn is_known_category(category: &str) -> bool {
    category == FALLBACK_CATEGORY || CATEGORY_TABLE.iter().any(|rule| rule.category == category)
}
