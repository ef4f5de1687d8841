//! DTOs shaped for the product list and product form templates.

use serde::Serialize;

use crate::domain::product::Product;

/// One row of the products table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit_price: String,
    pub quantity_in_stock: u32,
    pub expiration_date: Option<String>,
    pub in_stock: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.to_string(),
            category: product.category.to_string(),
            unit_price: format!("{:.2}", product.unit_price),
            quantity_in_stock: product.quantity_in_stock,
            expiration_date: product
                .expiration_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            in_stock: product.in_stock(),
        }
    }
}

/// Values pre-filled into the product modal.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProductFormView {
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub unit_price: String,
    pub quantity_in_stock: u32,
    pub expiration_date: String,
    /// Suggestions for the category input.
    pub categories: Vec<String>,
}

impl ProductFormView {
    pub fn new(editing: Option<&Product>, categories: &[String]) -> Self {
        let mut view = match editing {
            Some(product) => Self {
                id: Some(product.id.get()),
                name: product.name.to_string(),
                category: product.category.to_string(),
                // Exact value so an unchanged resubmission keeps the stored price.
                unit_price: product.unit_price.to_string(),
                quantity_in_stock: product.quantity_in_stock,
                expiration_date: product
                    .expiration_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                categories: Vec::new(),
            },
            None => Self::default(),
        };
        view.categories = categories.to_vec();
        view
    }
}
