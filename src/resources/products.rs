use crate::api::ProductReader;
use crate::domain::filters::{ProductFilters, ProductQuery};
use crate::domain::product::Product;
use crate::resources::Resource;

/// Inputs the product list depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsParams {
    pub page: usize,
    pub size: usize,
    pub filters: ProductFilters,
}

impl ProductsParams {
    pub fn new(page: usize, size: usize, filters: ProductFilters) -> Self {
        Self {
            page,
            size,
            filters,
        }
    }

    pub fn to_query(&self) -> ProductQuery {
        ProductQuery::new(self.filters.clone(), self.page, self.size)
    }
}

/// Current page of products for a set of [`ProductsParams`].
#[derive(Debug, Clone, Default)]
pub struct ProductsResource {
    params: ProductsParams,
    state: Resource<Vec<Product>>,
}

impl ProductsResource {
    pub fn new(params: ProductsParams) -> Self {
        Self {
            params,
            state: Resource::new(Vec::new()),
        }
    }

    pub fn params(&self) -> &ProductsParams {
        &self.params
    }

    pub fn data(&self) -> &[Product] {
        self.state.data()
    }

    pub fn state(&self) -> &Resource<Vec<Product>> {
        &self.state
    }

    /// Replaces the dependency tuple, returning whether it changed.
    pub fn set_params(&mut self, params: ProductsParams) -> bool {
        if self.params == params {
            return false;
        }
        self.params = params;
        true
    }

    /// Updates the params and fetches only when they differ from the current ones.
    pub async fn sync<A>(&mut self, api: &A, params: ProductsParams) -> bool
    where
        A: ProductReader + ?Sized,
    {
        if !self.set_params(params) {
            return false;
        }
        self.refetch(api).await
    }

    /// Fetches the page for the current params regardless of whether they changed.
    pub async fn refetch<A>(&mut self, api: &A) -> bool
    where
        A: ProductReader + ?Sized,
    {
        let ticket = self.state.begin();
        let query = self.params.to_query();
        log::debug!("Fetching products: {query:?}");
        let result = api.fetch_products(query).await;
        self.state.complete(ticket, result)
    }
}
