use actix_session::Session;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::api::InventoryApi;
use crate::dashboard::store::DashboardStore;
use crate::forms::products::{ProductForm, ToggleStockForm};
use crate::routes::{flash_service_error, redirect, session_dashboard};
use crate::services::products as products_service;

#[post("/products/new")]
pub async fn new_product(session: Session, store: web::Data<DashboardStore>) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    products_service::open_new_form(&mut dashboard);
    redirect("/")
}

#[post("/products/form/close")]
pub async fn close_form(session: Session, store: web::Data<DashboardStore>) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    products_service::close_form(&mut dashboard);
    redirect("/")
}

#[post("/products/{product_id}/edit")]
pub async fn edit_product(
    product_id: web::Path<i64>,
    session: Session,
    store: web::Data<DashboardStore>,
) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    if let Err(err) = products_service::open_edit_form(&mut dashboard, product_id.into_inner()) {
        flash_service_error(&err, "open the product");
    }
    redirect("/")
}

#[post("/products/save")]
pub async fn save_product(
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
    body: web::Bytes,
) -> impl Responder {
    let form = match serde_html_form::from_bytes::<ProductForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse product form: {err}");
            FlashMessage::error("Invalid product data.").send();
            return redirect("/");
        }
    };

    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    let updating = form.id.is_some();
    match products_service::save_product(&mut dashboard, api.get_ref(), form).await {
        Ok(product) => {
            let verb = if updating { "updated" } else { "created" };
            FlashMessage::success(format!("Product '{}' {verb}.", product.name)).send();
        }
        Err(err) => flash_service_error(&err, "save the product"),
    }
    redirect("/")
}

#[post("/products/{product_id}/delete")]
pub async fn delete_product(
    product_id: web::Path<i64>,
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    match products_service::delete_product(&mut dashboard, api.get_ref(), product_id.into_inner())
        .await
    {
        Ok(()) => FlashMessage::success("Product deleted.").send(),
        Err(err) => flash_service_error(&err, "delete the product"),
    }
    redirect("/")
}

#[post("/products/{product_id}/stock")]
pub async fn toggle_stock(
    product_id: web::Path<i64>,
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
    body: web::Bytes,
) -> impl Responder {
    let form = match serde_html_form::from_bytes::<ToggleStockForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse stock form: {err}");
            FlashMessage::error("Invalid stock update.").send();
            return redirect("/");
        }
    };

    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    let message = if form.in_stock {
        "Product marked out of stock."
    } else {
        "Product restocked."
    };
    match products_service::toggle_stock(
        &mut dashboard,
        api.get_ref(),
        product_id.into_inner(),
        form,
    )
    .await
    {
        Ok(()) => FlashMessage::success(message).send(),
        Err(err) => flash_service_error(&err, "update the stock"),
    }
    redirect("/")
}
