//! Mock API implementation for isolating the dashboard in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{ProductReader, ProductWriter};
use crate::domain::filters::ProductQuery;
use crate::domain::metrics::InventoryMetrics;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

mock! {
    pub InventoryApi {}

    #[async_trait]
    impl ProductReader for InventoryApi {
        async fn fetch_products(&self, query: ProductQuery) -> ApiResult<Vec<Product>>;
        async fn fetch_metrics(&self) -> ApiResult<InventoryMetrics>;
    }

    #[async_trait]
    impl ProductWriter for InventoryApi {
        async fn create_product(&self, product: NewProduct) -> ApiResult<Product>;
        async fn update_product(&self, product: Product) -> ApiResult<Product>;
        async fn delete_product(&self, id: ProductId) -> ApiResult<()>;
        async fn mark_in_stock(&self, id: ProductId, quantity: u32) -> ApiResult<()>;
        async fn mark_out_of_stock(&self, id: ProductId) -> ApiResult<()>;
    }
}
