//! HTTP client for the inventory backend REST API.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{ProductReader, ProductWriter};
use crate::domain::filters::ProductQuery;
use crate::domain::metrics::InventoryMetrics;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

#[derive(Clone, Debug)]
pub struct HttpInventoryApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpInventoryApi {
    /// Creates a client for the backend rooted at `base_url`.
    ///
    /// Requests never time out unless `timeout` is provided.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/products{}", self.base_url, path)
    }
}

/// Maps non-success statuses onto [`ApiError`] variants.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        StatusCode::BAD_REQUEST => {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<BTreeMap<String, String>>(&body) {
                Ok(fields) => Err(ApiError::Validation(fields)),
                Err(_) => Err(ApiError::Status {
                    status: status.as_u16(),
                    message: body,
                }),
            }
        }
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ProductReader for HttpInventoryApi {
    async fn fetch_products(&self, query: ProductQuery) -> ApiResult<Vec<Product>> {
        let response = self
            .client
            .get(self.url(""))
            .query(&query.to_pairs())
            .send()
            .await?;
        let products = check_status(response).await?.json().await?;
        Ok(products)
    }

    async fn fetch_metrics(&self) -> ApiResult<InventoryMetrics> {
        let response = self.client.get(self.url("/metrics")).send().await?;
        let metrics = check_status(response).await?.json().await?;
        Ok(metrics)
    }
}

#[async_trait]
impl ProductWriter for HttpInventoryApi {
    async fn create_product(&self, product: NewProduct) -> ApiResult<Product> {
        let response = self.client.post(self.url("")).json(&product).send().await?;
        let created = check_status(response).await?.json().await?;
        Ok(created)
    }

    async fn update_product(&self, product: Product) -> ApiResult<Product> {
        let response = self
            .client
            .put(self.url(&format!("/{}", product.id)))
            .json(&product)
            .send()
            .await?;
        let updated = check_status(response).await?.json().await?;
        Ok(updated)
    }

    async fn delete_product(&self, id: ProductId) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn mark_in_stock(&self, id: ProductId, quantity: u32) -> ApiResult<()> {
        let response = self
            .client
            .put(self.url(&format!("/{id}/instock")))
            .query(&[("quantity", quantity)])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn mark_out_of_stock(&self, id: ProductId) -> ApiResult<()> {
        let response = self
            .client
            .post(self.url(&format!("/{id}/outofstock")))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
