//! Catalog filter/sort pipeline.
//!
//! A [`ProductQuery`] is a pure view over a product slice: the same
//! products and the same query always yield the same ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::Product;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort order: {0} (expected featured, price-asc, price-desc, name-asc or name-desc)")]
pub struct SortOrderError(String);

/// Category restriction for a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Only products whose category equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Product ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    /// Every ordering, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// The key used on the command line and in links.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::NameAsc => "Name: A to Z",
            Self::NameDesc => "Name: Z to A",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::NameAsc => locale_compare(&a.name, &b.name),
            Self::NameDesc => locale_compare(&b.name, &a.name),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| SortOrderError(s.to_owned()))
    }
}

/// Search, category and sort inputs for the shop listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    /// Free-text search; blank means no search.
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl ProductQuery {
    /// A query that returns every product in catalog order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Filter and sort `products`.
    ///
    /// Sorting is stable, so products with equal keys keep their relative
    /// catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.search_needle();
        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|p| needle.as_deref().is_none_or(|n| matches_search(p, n)))
            .filter(|p| self.category.matches(p))
            .collect();

        if self.sort != SortOrder::Featured {
            matched.sort_by(|a, b| self.sort.compare(a, b));
        }
        matched
    }

    // Blank input disables search; otherwise the untrimmed term is matched.
    fn search_needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Compare two strings the way a shopper expects a name listing ordered.
///
/// Base letters compare case- and accent-insensitively first, so "École"
/// sorts with the other E names. Ties are broken by accents (unaccented
/// first), then by case (lowercase first), and finally by raw code points
/// so the order is total.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

// Decompose, drop combining marks and fold case.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}
