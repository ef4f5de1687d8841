//! Filter and query types used to request product pages.

use serde::{Deserialize, Serialize};

/// Tri-state stock selector shown in the search bar.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl Availability {
    /// Maps the selector onto the backend `inStock` filter.
    pub fn in_stock_filter(self) -> Option<bool> {
        match self {
            Availability::All => None,
            Availability::InStock => Some(true),
            Availability::OutOfStock => Some(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Availability::All => "all",
            Availability::InStock => "inStock",
            Availability::OutOfStock => "outOfStock",
        }
    }
}

/// Filters derived from the search bar; absent fields do not constrain results.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ProductFilters {
    pub name: Option<String>,
    pub category: Option<Vec<String>>,
    pub in_stock: Option<bool>,
}

impl ProductFilters {
    /// Derives filters from raw UI fields.
    ///
    /// A blank name, an empty category selection and [`Availability::All`]
    /// each leave the corresponding filter unset. A non-blank name is sent
    /// as typed, since the backend matches it as a substring.
    pub fn derive(name: &str, categories: &[String], availability: Availability) -> Self {
        Self {
            name: (!name.trim().is_empty()).then(|| name.to_string()),
            category: (!categories.is_empty()).then(|| categories.to_vec()),
            in_stock: availability.in_stock_filter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.in_stock.is_none()
    }
}

/// Filters merged with the pagination cursor, as sent to the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub filters: ProductFilters,
    pub page: usize,
    pub size: usize,
}

impl ProductQuery {
    pub fn new(filters: ProductFilters, page: usize, size: usize) -> Self {
        Self {
            filters,
            page,
            size,
        }
    }

    /// Flattens the query into `key=value` pairs.
    ///
    /// Categories are emitted as repeated `category` keys; unset filters are
    /// omitted entirely.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.filters.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(categories) = &self.filters.category {
            pairs.extend(categories.iter().map(|c| ("category", c.clone())));
        }
        if let Some(in_stock) = self.filters.in_stock {
            pairs.push(("inStock", in_stock.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.size.to_string()));
        pairs
    }
}
