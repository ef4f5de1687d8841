//! Services handling product mutations from the dashboard.

use crate::api::InventoryApi;
use crate::dashboard::Dashboard;
use crate::domain::product::{Product, ProductSubmission};
use crate::domain::types::ProductId;
use crate::forms::products::{ProductForm, ToggleStockForm};
use crate::services::ServiceResult;

pub fn open_new_form(dashboard: &mut Dashboard) {
    dashboard.new_product();
}

/// Opens the form for a product shown on the current page.
pub fn open_edit_form(dashboard: &mut Dashboard, product_id: i64) -> ServiceResult<()> {
    let id = ProductId::new(product_id)?;
    dashboard.edit(id)?;
    Ok(())
}

pub fn close_form(dashboard: &mut Dashboard) {
    dashboard.close_form();
}

/// Validates the product form and creates or updates the product.
pub async fn save_product<A>(
    dashboard: &mut Dashboard,
    api: &A,
    form: ProductForm,
) -> ServiceResult<Product>
where
    A: InventoryApi + ?Sized,
{
    let submission = ProductSubmission::try_from(form).map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        err
    })?;

    let product = dashboard
        .submit_form(api, submission)
        .await
        .map_err(|err| {
            log::error!("Failed to save product: {err}");
            err
        })?;

    Ok(product)
}

pub async fn delete_product<A>(
    dashboard: &mut Dashboard,
    api: &A,
    product_id: i64,
) -> ServiceResult<()>
where
    A: InventoryApi + ?Sized,
{
    let id = ProductId::new(product_id)?;

    dashboard.delete(api, id).await.map_err(|err| {
        log::error!("Failed to delete product {id}: {err}");
        err
    })?;

    Ok(())
}

pub async fn toggle_stock<A>(
    dashboard: &mut Dashboard,
    api: &A,
    product_id: i64,
    form: ToggleStockForm,
) -> ServiceResult<()>
where
    A: InventoryApi + ?Sized,
{
    let id = ProductId::new(product_id)?;

    dashboard
        .toggle_stock(api, id, form.in_stock, form.quantity)
        .await
        .map_err(|err| {
            log::error!("Failed to toggle stock of product {id}: {err}");
            err
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::InMemoryInventoryApi;
    use crate::domain::product::NewProduct;
    use crate::domain::types::{CategoryName, ProductName};
    use crate::services::ServiceError;

    fn inventory() -> InMemoryInventoryApi {
        InMemoryInventoryApi::with_products((1..=6).map(|i| {
            NewProduct::new(
                ProductName::new(format!("Product {i}")).unwrap(),
                CategoryName::new("General").unwrap(),
                2.0,
                i,
                None,
            )
        }))
    }

    fn product_form(id: Option<i64>, name: &str) -> ProductForm {
        ProductForm {
            id,
            name: name.to_string(),
            category: "General".to_string(),
            unit_price: 4.0,
            quantity_in_stock: 3,
            expiration_date: None,
        }
    }

    #[tokio::test]
    async fn delete_removes_product_from_refreshed_page() {
        let api = inventory();
        let mut dashboard = Dashboard::default();
        dashboard.mount(&api).await;
        assert!(dashboard.products().data().iter().any(|p| p.id.get() == 5));

        delete_product(&mut dashboard, &api, 5).await.unwrap();

        assert_eq!(dashboard.products().data().len(), 5);
        assert!(dashboard.products().data().iter().all(|p| p.id.get() != 5));
        assert_eq!(
            dashboard.metrics().data().map(|m| m.overall.total_stock),
            Some(1 + 2 + 3 + 4 + 6)
        );
    }

    #[tokio::test]
    async fn deleting_unknown_product_is_not_found() {
        let api = inventory();
        let mut dashboard = Dashboard::default();

        let result = delete_product(&mut dashboard, &api, 42).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));

        let result = delete_product(&mut dashboard, &api, 0).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[tokio::test]
    async fn save_creates_then_updates() {
        let api = inventory();
        let mut dashboard = Dashboard::default();
        dashboard.mount(&api).await;

        open_new_form(&mut dashboard);
        let created = save_product(&mut dashboard, &api, product_form(None, "Pepper"))
            .await
            .unwrap();
        assert_eq!(created.id.get(), 7);
        assert!(!dashboard.state().show_form());

        open_edit_form(&mut dashboard, 7).unwrap();
        assert_eq!(
            dashboard.state().editing().map(|p| p.name.as_str()),
            Some("Pepper")
        );
        save_product(&mut dashboard, &api, product_form(Some(7), "Black pepper"))
            .await
            .unwrap();

        let stored = api.products();
        assert_eq!(stored.len(), 7);
        assert_eq!(stored[6].name.as_str(), "Black pepper");
    }

    #[tokio::test]
    async fn invalid_form_is_rejected_without_backend_call() {
        let api = inventory();
        let mut dashboard = Dashboard::default();
        open_new_form(&mut dashboard);

        let result = save_product(&mut dashboard, &api, product_form(None, "")).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(dashboard.state().show_form());
        assert_eq!(api.products().len(), 6);
    }

    #[tokio::test]
    async fn toggle_stock_round_trip() {
        let api = inventory();
        let mut dashboard = Dashboard::default();

        toggle_stock(
            &mut dashboard,
            &api,
            2,
            ToggleStockForm {
                in_stock: true,
                quantity: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(api.products()[1].quantity_in_stock, 0);

        toggle_stock(
            &mut dashboard,
            &api,
            2,
            ToggleStockForm {
                in_stock: false,
                quantity: Some(9),
            },
        )
        .await
        .unwrap();
        assert_eq!(api.products()[1].quantity_in_stock, 9);
    }

    #[tokio::test]
    async fn edit_of_product_outside_current_page_fails() {
        let mut dashboard = Dashboard::default();
        let result = open_edit_form(&mut dashboard, 3);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
