//! In-process implementation of the inventory API.
//!
//! Mirrors the backend's filtering, pagination and metrics rules so the
//! dashboard can be exercised without a running backend.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{ProductReader, ProductWriter};
use crate::domain::filters::ProductQuery;
use crate::domain::metrics::InventoryMetrics;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

#[derive(Debug, Default)]
struct Inventory {
    products: Vec<Product>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryInventoryApi {
    inventory: Mutex<Inventory>,
}

impl InMemoryInventoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the inventory, assigning ids in insertion order.
    pub fn with_products(products: impl IntoIterator<Item = NewProduct>) -> Self {
        let api = Self::new();
        {
            let mut inventory = api.lock();
            for new_product in products {
                inventory.last_id += 1;
                if let Ok(id) = ProductId::new(inventory.last_id) {
                    inventory.products.push(Product::from_new(id, new_product));
                }
            }
        }
        api
    }

    /// Snapshot of every stored product.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inventory.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn matches(product: &Product, query: &ProductQuery) -> bool {
    let filters = &query.filters;
    let name_matches = filters.name.as_ref().is_none_or(|name| {
        product
            .name
            .to_lowercase()
            .contains(&name.to_lowercase())
    });
    let category_matches = filters
        .category
        .as_ref()
        .is_none_or(|categories| categories.iter().any(|c| c == product.category.as_str()));
    let stock_matches = filters
        .in_stock
        .is_none_or(|in_stock| product.in_stock() == in_stock);

    name_matches && category_matches && stock_matches
}

#[async_trait]
impl ProductReader for InMemoryInventoryApi {
    async fn fetch_products(&self, query: ProductQuery) -> ApiResult<Vec<Product>> {
        let inventory = self.lock();
        let products = inventory
            .products
            .iter()
            .filter(|product| matches(product, &query))
            .skip(query.page.saturating_mul(query.size))
            .take(query.size)
            .cloned()
            .collect();
        Ok(products)
    }

    async fn fetch_metrics(&self) -> ApiResult<InventoryMetrics> {
        Ok(InventoryMetrics::from_products(&self.lock().products))
    }
}

#[async_trait]
impl ProductWriter for InMemoryInventoryApi {
    async fn create_product(&self, product: NewProduct) -> ApiResult<Product> {
        let mut inventory = self.lock();
        inventory.last_id += 1;
        let id = ProductId::new(inventory.last_id).map_err(|e| ApiError::Decode(e.to_string()))?;
        let created = Product::from_new(id, product);
        inventory.products.push(created.clone());
        Ok(created)
    }

    async fn update_product(&self, product: Product) -> ApiResult<Product> {
        let mut inventory = self.lock();
        let stored = inventory
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(ApiError::NotFound)?;
        stored.name = product.name;
        stored.category = product.category;
        stored.unit_price = product.unit_price;
        stored.quantity_in_stock = product.quantity_in_stock;
        stored.expiration_date = product.expiration_date;
        Ok(stored.clone())
    }

    async fn delete_product(&self, id: ProductId) -> ApiResult<()> {
        let mut inventory = self.lock();
        let before = inventory.products.len();
        inventory.products.retain(|p| p.id != id);
        if inventory.products.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn mark_in_stock(&self, id: ProductId, quantity: u32) -> ApiResult<()> {
        let mut inventory = self.lock();
        let stored = inventory
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;
        stored.quantity_in_stock = quantity;
        Ok(())
    }

    async fn mark_out_of_stock(&self, id: ProductId) -> ApiResult<()> {
        let mut inventory = self.lock();
        let stored = inventory
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;
        stored.quantity_in_stock = 0;
        Ok(())
    }
}
