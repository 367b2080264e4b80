//! Category assignments and brand grouping.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::Product;
use crate::classify::categorize;

/// Brand used for products without a `brand` attribute.
pub const DEFAULT_BRAND: &str = "Generic";

/// The category and brand chosen for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAssignment<'a> {
    /// The product identifier.
    pub product_id: &'a str,
    /// The product display name.
    pub product_name: &'a str,
    /// The matched category.
    pub category: &'static str,
    /// The product brand, or [`DEFAULT_BRAND`].
    pub brand: &'a str,
}

impl<'a> CategoryAssignment<'a> {
    /// Categorize a single product.
    pub fn for_product(product: &'a Product) -> Self {
        let assignment = Self {
            product_id: &product.id,
            product_name: &product.name,
            category: categorize(&product.name),
            brand: product.brand().unwrap_or(DEFAULT_BRAND),
        };

        debug!(
            product_id = assignment.product_id,
            category = assignment.category,
            brand = assignment.brand,
            "Assigned product"
        );
        assignment
    }

    /// The `<category>/<brand>` path the product is filed under.
    pub fn category_path(&self) -> String {
        format!("{}/{}", self.category, self.brand)
    }
}

/// Categorize every product, keeping input order.
pub fn assign_all(products: &[Product]) -> Vec<CategoryAssignment<'_>> {
    products.iter().map(CategoryAssignment::for_product).collect()
}

/// Distinct brands per category.
///
/// Categories keep the order in which they were first seen. Brands within a
/// category are kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandsByCategory {
    groups: Vec<(&'static str, BTreeSet<String>)>,
}

impl BrandsByCategory {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group the brands of already-categorized products.
    pub fn from_assignments(assignments: &[CategoryAssignment<'_>]) -> Self {
        let mut grouping = Self::new();
        for assignment in assignments {
            grouping.insert(assignment.category, assignment.brand);
        }
        grouping
    }

    /// Record `brand` under `category`.
    pub fn insert(&mut self, category: &'static str, brand: &str) {
        match self.groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, brands)) => {
                brands.insert(brand.to_string());
            }
            None => {
                self.groups
                    .push((category, BTreeSet::from([brand.to_string()])));
            }
        }
    }

    /// The brands recorded under `category`.
    pub fn brands(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.groups
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, brands)| brands)
    }

    /// Iterate categories in first-seen order with their brands.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &BTreeSet<String>)> {
        self.groups.iter().map(|(category, brands)| (*category, brands))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no category has been recorded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group the brands of `products` by category.
pub fn group_brands(products: &[Product]) -> BrandsByCategory {
    BrandsByCategory::from_assignments(&assign_all(products))
}
