use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Stock and value aggregates for a group of products.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetrics {
    #[serde(default)]
    pub total_stock: u64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub avg_price: f64,
}

impl CategoryMetrics {
    /// Aggregates `products` the same way the inventory backend does.
    ///
    /// The average price only considers products that are in stock and is
    /// `0` when there are none.
    pub fn from_products<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut metrics = Self::default();
        let mut priced = 0usize;
        let mut price_sum = 0.0;

        for product in products {
            let quantity = u64::from(product.quantity_in_stock);
            metrics.total_stock += quantity;
            metrics.total_value += product.unit_price * quantity as f64;
            if product.in_stock() {
                priced += 1;
                price_sum += product.unit_price;
            }
        }

        if priced > 0 {
            metrics.avg_price = price_sum / priced as f64;
        }
        metrics
    }
}

/// Inventory-wide metrics plus a breakdown per category.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMetrics {
    #[serde(flatten)]
    pub overall: CategoryMetrics,
    #[serde(default)]
    pub by_category: BTreeMap<String, CategoryMetrics>,
}

impl InventoryMetrics {
    pub fn from_products(products: &[Product]) -> Self {
        let mut groups: BTreeMap<String, Vec<&Product>> = BTreeMap::new();
        for product in products {
            groups
                .entry(product.category.to_string())
                .or_default()
                .push(product);
        }

        Self {
            overall: CategoryMetrics::from_products(products),
            by_category: groups
                .into_iter()
                .map(|(category, items)| (category, CategoryMetrics::from_products(items)))
                .collect(),
        }
    }
}
