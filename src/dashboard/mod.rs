//! Orchestration of the inventory view.
//!
//! [`Dashboard`] owns the [`ViewState`] and both resources. Actions that
//! change the product params trigger one product fetch; mutations always
//! refetch products and metrics afterwards, even when the mutation failed.

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{InventoryApi, ProductReader, ProductWriter};
use crate::domain::product::{Product, ProductSubmission};
use crate::domain::types::ProductId;
use crate::resources::{MetricsResource, ProductsResource};

pub mod state;
#[cfg(feature = "server")]
pub mod store;

pub use state::{Action, FilterChange, ViewState};

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct Dashboard {
    state: ViewState,
    products: ProductsResource,
    metrics: MetricsResource,
    mounted: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Dashboard {
    pub fn new(page_size: usize) -> Self {
        let state = ViewState::new(page_size);
        let products = ProductsResource::new(state.products_params());
        Self {
            state,
            products,
            metrics: MetricsResource::new(),
            mounted: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn products(&self) -> &ProductsResource {
        &self.products
    }

    pub fn metrics(&self) -> &MetricsResource {
        &self.metrics
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.can_go_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next(self.products.data().len())
    }

    /// Initial load of both resources.
    pub async fn mount<A>(&mut self, api: &A)
    where
        A: ProductReader + ?Sized,
    {
        self.mounted = true;
        self.refetch_products(api).await;
        self.metrics.refetch(api).await;
    }

    /// Applies `action` without fetching anything.
    pub fn apply(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Applies `action` and fetches products when their params changed.
    pub async fn dispatch<A>(&mut self, api: &A, action: Action)
    where
        A: ProductReader + ?Sized,
    {
        self.state.apply(action);
        if self.products.sync(api, self.state.products_params()).await {
            self.state.sync_categories(self.products.data());
        }
    }

    /// Goes back to the first page and reloads both resources.
    pub async fn search<A>(&mut self, api: &A)
    where
        A: ProductReader + ?Sized,
    {
        self.state.apply(Action::SetPage(0));
        self.products.set_params(self.state.products_params());
        self.refetch_all(api).await;
    }

    /// Resets every filter and the page, then reloads both resources.
    pub async fn clear<A>(&mut self, api: &A)
    where
        A: ProductReader + ?Sized,
    {
        self.state.apply(Action::ResetFilters);
        self.products.set_params(self.state.products_params());
        self.refetch_all(api).await;
    }

    pub async fn next_page<A>(&mut self, api: &A)
    where
        A: ProductReader + ?Sized,
    {
        if self.can_go_next() {
            self.dispatch(api, Action::NextPage).await;
        }
    }

    pub async fn prev_page<A>(&mut self, api: &A)
    where
        A: ProductReader + ?Sized,
    {
        if self.can_go_prev() {
            self.dispatch(api, Action::PrevPage).await;
        }
    }

    /// Opens the form for a product of the current page.
    pub fn edit(&mut self, id: ProductId) -> ApiResult<()> {
        let product = self
            .products
            .data()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)?;
        self.state.apply(Action::OpenForm(Some(product)));
        Ok(())
    }

    pub fn new_product(&mut self) {
        self.state.apply(Action::OpenForm(None));
    }

    pub fn close_form(&mut self) {
        self.state.apply(Action::CloseForm);
    }

    pub async fn delete<A>(&mut self, api: &A, id: ProductId) -> ApiResult<()>
    where
        A: InventoryApi + ?Sized,
    {
        let result = api.delete_product(id).await;
        self.refetch_all(api).await;
        result
    }

    /// Flips the stock status of a product.
    ///
    /// Products in stock are marked out of stock; others are restocked with
    /// `new_quantity`, or zero units when none is given.
    pub async fn toggle_stock<A>(
        &mut self,
        api: &A,
        id: ProductId,
        currently_in_stock: bool,
        new_quantity: Option<u32>,
    ) -> ApiResult<()>
    where
        A: InventoryApi + ?Sized,
    {
        let result = if currently_in_stock {
            api.mark_out_of_stock(id).await
        } else {
            api.mark_in_stock(id, new_quantity.unwrap_or(0)).await
        };
        self.refetch_all(api).await;
        result
    }

    /// Creates or updates a product, then closes the form.
    pub async fn submit_form<A>(
        &mut self,
        api: &A,
        submission: ProductSubmission,
    ) -> ApiResult<Product>
    where
        A: InventoryApi + ?Sized,
    {
        let result = match submission {
            ProductSubmission::Update(product) => api.update_product(product).await,
            ProductSubmission::Create(new_product) => api.create_product(new_product).await,
        };
        self.state.apply(Action::CloseForm);
        self.refetch_all(api).await;
        result
    }

    pub async fn refetch_all<A>(&mut self, api: &A)
    where
        A: ProductReader + ?Sized,
    {
        self.refetch_products(api).await;
        self.metrics.refetch(api).await;
    }

    async fn refetch_products<A>(&mut self, api: &A)
    where
        A: ProductReader + ?Sized,
    {
        if self.products.refetch(api).await {
            self.state.sync_categories(self.products.data());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockInventoryApi;
    use crate::domain::filters::Availability;
    use crate::domain::product::NewProduct;
    use crate::domain::types::{CategoryName, ProductName};
    use mockall::predicate::eq;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(format!("Item {id}")).unwrap(),
            category: CategoryName::new(category).unwrap(),
            unit_price: 2.0,
            quantity_in_stock: 5,
            expiration_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn page_of(count: i64) -> Vec<Product> {
        (1..=count).map(|id| product(id, "General")).collect()
    }

    fn id(value: i64) -> ProductId {
        ProductId::new(value).unwrap()
    }

    #[tokio::test]
    async fn initial_full_page_enables_next_only() {
        let mut api = MockInventoryApi::new();
        api.expect_fetch_products()
            .withf(|q| q.page == 0 && q.size == PAGE_SIZE && q.filters.is_empty())
            .times(1)
            .returning(|_| Ok(page_of(10)));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.mount(&api).await;

        assert!(dashboard.is_mounted());
        assert!(dashboard.can_go_next());
        assert!(!dashboard.can_go_prev());
        assert!(dashboard.metrics().data().is_some());
    }

    #[tokio::test]
    async fn short_page_disables_next() {
        let mut api = MockInventoryApi::new();
        api.expect_fetch_products()
            .times(1)
            .returning(|_| Ok(page_of(9)));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.mount(&api).await;
        assert!(!dashboard.can_go_next());

        // Disabled controls do nothing, so no further fetch is expected.
        dashboard.next_page(&api).await;
        assert_eq!(dashboard.state().page(), 0);
    }

    #[tokio::test]
    async fn search_resets_page_and_fetches_with_filters() {
        let mut api = MockInventoryApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_fetch_products()
            .withf(|q| q.page == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page_of(10)));
        api.expect_fetch_products()
            .withf(|q| q.page == 0 && q.size == 10 && q.filters.name.as_deref() == Some("foo"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page_of(3)));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.dispatch(&api, Action::SetPage(1)).await;
        dashboard.apply(Action::SetFilter(FilterChange::Name("foo".into())));
        dashboard.search(&api).await;

        assert_eq!(dashboard.state().page(), 0);
        assert_eq!(dashboard.products().data().len(), 3);
    }

    #[tokio::test]
    async fn clear_resets_filters_and_refetches_both() {
        let mut api = MockInventoryApi::new();
        api.expect_fetch_products()
            .withf(|q| q.page == 0 && q.filters.is_empty())
            .times(1)
            .returning(|_| Ok(page_of(2)));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.apply(Action::SetFilter(FilterChange::Name("foo".into())));
        dashboard.apply(Action::SetFilter(FilterChange::Availability(
            Availability::OutOfStock,
        )));
        dashboard.clear(&api).await;

        assert!(dashboard.state().filters().is_empty());
        assert_eq!(dashboard.state().availability(), Availability::All);
    }

    #[tokio::test]
    async fn delete_refetches_each_resource_once() {
        let mut api = MockInventoryApi::new();
        api.expect_delete_product()
            .with(eq(id(5)))
            .times(1)
            .returning(|_| Ok(()));
        api.expect_fetch_products()
            .times(1)
            .returning(|_| Ok(vec![product(4, "General"), product(6, "General")]));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.delete(&api, id(5)).await.unwrap();

        assert!(dashboard.products().data().iter().all(|p| p.id != id(5)));
    }

    #[tokio::test]
    async fn failed_delete_still_refetches() {
        let mut api = MockInventoryApi::new();
        api.expect_delete_product()
            .times(1)
            .returning(|_| Err(ApiError::NotFound));
        api.expect_fetch_products()
            .times(1)
            .returning(|_| Ok(vec![]));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.delete(&api, id(5)).await, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn toggle_in_stock_product_marks_it_out_of_stock() {
        let mut api = MockInventoryApi::new();
        api.expect_mark_out_of_stock()
            .with(eq(id(2)))
            .times(1)
            .returning(|_| Ok(()));
        api.expect_mark_in_stock().times(0);
        api.expect_fetch_products().times(1).returning(|_| Ok(vec![]));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard
            .toggle_stock(&api, id(2), true, Some(8))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn toggle_out_of_stock_product_defaults_quantity_to_zero() {
        let mut api = MockInventoryApi::new();
        api.expect_mark_in_stock()
            .with(eq(id(2)), eq(0))
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_mark_in_stock()
            .with(eq(id(3)), eq(7))
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_mark_out_of_stock().times(0);
        api.expect_fetch_products().times(2).returning(|_| Ok(vec![]));
        api.expect_fetch_metrics()
            .times(2)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.toggle_stock(&api, id(2), false, None).await.unwrap();
        dashboard
            .toggle_stock(&api, id(3), false, Some(7))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn submission_with_id_updates() {
        let mut api = MockInventoryApi::new();
        api.expect_update_product()
            .withf(|p| p.id.get() == 1)
            .times(1)
            .returning(Ok);
        api.expect_create_product().times(0);
        api.expect_fetch_products().times(1).returning(|_| Ok(vec![]));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.new_product();
        let updated = dashboard
            .submit_form(&api, ProductSubmission::Update(product(1, "Dairy")))
            .await
            .unwrap();

        assert_eq!(updated.id, id(1));
        assert!(!dashboard.state().show_form());
    }

    #[tokio::test]
    async fn submission_without_id_creates() {
        let mut api = MockInventoryApi::new();
        api.expect_create_product()
            .times(1)
            .returning(|new_product| Ok(Product::from_new(ProductId::new(11).unwrap(), new_product)));
        api.expect_update_product().times(0);
        api.expect_fetch_products().times(1).returning(|_| Ok(vec![]));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let new_product = NewProduct::new(
            ProductName::new("Yogurt").unwrap(),
            CategoryName::new("Dairy").unwrap(),
            0.99,
            4,
            None,
        );

        let mut dashboard = Dashboard::default();
        let created = dashboard
            .submit_form(&api, ProductSubmission::Create(new_product))
            .await
            .unwrap();

        assert_eq!(created.id, id(11));
    }

    #[tokio::test]
    async fn edit_opens_form_for_loaded_product() {
        let mut api = MockInventoryApi::new();
        api.expect_fetch_products()
            .times(1)
            .returning(|_| Ok(vec![product(1, "Dairy"), product(2, "Bakery")]));
        api.expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(Default::default()));

        let mut dashboard = Dashboard::default();
        dashboard.mount(&api).await;

        assert_eq!(dashboard.state().categories(), ["Dairy", "Bakery"]);
        assert_eq!(dashboard.edit(id(9)), Err(ApiError::NotFound));

        dashboard.edit(id(2)).unwrap();
        assert!(dashboard.state().show_form());
        assert_eq!(dashboard.state().editing().map(|p| p.id), Some(id(2)));
    }

    #[tokio::test]
    async fn dispatch_without_param_change_does_not_fetch() {
        let mut api = MockInventoryApi::new();
        api.expect_fetch_products().times(0);

        let mut dashboard = Dashboard::default();
        dashboard.dispatch(&api, Action::PrevPage).await;
        dashboard.dispatch(&api, Action::OpenForm(None)).await;

        assert!(dashboard.state().show_form());
    }
}
