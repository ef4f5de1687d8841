use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ProductId, ProductName};

/// Product as returned by the inventory backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub category: CategoryName,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub quantity_in_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDate>,
}

impl Product {
    /// A product counts as available while it has any units left.
    pub fn in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }

    /// Builds the product the backend would return for `new_product`.
    pub fn from_new(id: ProductId, new_product: NewProduct) -> Self {
        Self {
            id,
            name: new_product.name,
            category: new_product.category,
            unit_price: new_product.unit_price,
            quantity_in_stock: new_product.quantity_in_stock,
            expiration_date: new_product.expiration_date,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Product payload for creation requests; the backend assigns the id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: ProductName,
    pub category: CategoryName,
    pub unit_price: f64,
    pub quantity_in_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
}

impl NewProduct {
    #[must_use]
    pub fn new(
        name: ProductName,
        category: CategoryName,
        unit_price: f64,
        quantity_in_stock: u32,
        expiration_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            name,
            category,
            unit_price,
            quantity_in_stock,
            expiration_date,
        }
    }
}

/// Outcome of the product form: an identifier means update, none means create.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductSubmission {
    Create(NewProduct),
    Update(Product),
}

impl ProductSubmission {
    pub fn is_update(&self) -> bool {
        matches!(self, ProductSubmission::Update(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        Product {
            id: ProductId::new(3).unwrap(),
            name: ProductName::new("Milk").unwrap(),
            category: CategoryName::new("Dairy").unwrap(),
            unit_price: 1.25,
            quantity_in_stock: 0,
            expiration_date: NaiveDate::from_ymd_opt(2026, 11, 2),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn in_stock_follows_quantity() {
        let mut product = sample();
        assert!(!product.in_stock());
        product.quantity_in_stock = 4;
        assert!(product.in_stock());
    }

    #[test]
    fn product_uses_backend_wire_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Milk",
                "category": "Dairy",
                "unitPrice": 1.25,
                "quantityInStock": 0,
                "expirationDate": "2026-11-02"
            })
        );
    }

    #[test]
    fn product_accepts_backend_payload_with_timestamps() {
        let product: Product = serde_json::from_value(json!({
            "id": 9,
            "name": "Bread",
            "category": "Bakery",
            "unitPrice": 2.5,
            "quantityInStock": 12,
            "expirationDate": null,
            "createdAt": "2026-10-01",
            "updatedAt": "2026-10-02"
        }))
        .unwrap();

        assert_eq!(product.id.get(), 9);
        assert_eq!(product.expiration_date, None);
        assert_eq!(product.created_at, NaiveDate::from_ymd_opt(2026, 10, 1));
    }

    #[test]
    fn page_with_oversized_category_still_decodes() {
        let long_category = "Seasonal imports from small independent producers abroad, ltd";
        assert!(long_category.chars().count() > CategoryName::MAX_LEN);

        let products: Vec<Product> = serde_json::from_value(json!([
            {"id": 1, "name": "Milk", "category": "Dairy", "unitPrice": 1.0, "quantityInStock": 2},
            {"id": 2, "name": "Figs", "category": long_category, "unitPrice": 3.0, "quantityInStock": 1}
        ]))
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].category.as_str(), long_category);
    }
}
