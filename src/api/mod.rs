//! Contract of the inventory backend consumed by the dashboard.

use async_trait::async_trait;

use crate::api::errors::ApiResult;
use crate::domain::filters::ProductQuery;
use crate::domain::metrics::InventoryMetrics;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

pub mod errors;
#[cfg(feature = "server")]
pub mod http;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[async_trait]
pub trait ProductReader: Send + Sync {
    async fn fetch_products(&self, query: ProductQuery) -> ApiResult<Vec<Product>>;
    async fn fetch_metrics(&self) -> ApiResult<InventoryMetrics>;
}

#[async_trait]
pub trait ProductWriter: Send + Sync {
    async fn create_product(&self, product: NewProduct) -> ApiResult<Product>;
    async fn update_product(&self, product: Product) -> ApiResult<Product>;
    async fn delete_product(&self, id: ProductId) -> ApiResult<()>;
    async fn mark_in_stock(&self, id: ProductId, quantity: u32) -> ApiResult<()>;
    async fn mark_out_of_stock(&self, id: ProductId) -> ApiResult<()>;
}

/// Full backend surface, usable as a trait object in application state.
pub trait InventoryApi: ProductReader + ProductWriter {}

impl<T> InventoryApi for T where T: ProductReader + ProductWriter + ?Sized {}
