use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::InventoryApi;
use crate::dashboard::store::DashboardStore;
use crate::forms::main::SearchForm;
use crate::routes::{
    base_context, flash_service_error, redirect, render_template, session_dashboard,
};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    let data = match main_service::load_index_page(&mut dashboard, api.get_ref()).await {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "index");
    context.insert("search", &data.search);
    context.insert("products", &data.products);
    context.insert("form", &data.form);
    context.insert("metrics", &data.metrics);
    context.insert("products_error", &data.products_error);
    context.insert("metrics_error", &data.metrics_error);

    render_template(&tera, "main/index.html", &context)
}

#[post("/search")]
pub async fn search(
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
    body: web::Bytes,
) -> impl Responder {
    let form = match serde_html_form::from_bytes::<SearchForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse search form: {err}");
            FlashMessage::error("Invalid search parameters.").send();
            return redirect("/");
        }
    };

    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    if let Err(err) = main_service::search(&mut dashboard, api.get_ref(), form).await {
        flash_service_error(&err, "search products");
    }
    redirect("/")
}

#[post("/clear")]
pub async fn clear(
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    if let Err(err) = main_service::clear(&mut dashboard, api.get_ref()).await {
        flash_service_error(&err, "clear filters");
    }
    redirect("/")
}

#[post("/page/prev")]
pub async fn prev_page(
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    if let Err(err) = main_service::prev_page(&mut dashboard, api.get_ref()).await {
        flash_service_error(&err, "load the previous page");
    }
    redirect("/")
}

#[post("/page/next")]
pub async fn next_page(
    session: Session,
    store: web::Data<DashboardStore>,
    api: web::Data<dyn InventoryApi>,
) -> impl Responder {
    let dashboard = match session_dashboard(&session, &store) {
        Ok(dashboard) => dashboard,
        Err(response) => return response,
    };
    let mut dashboard = dashboard.lock().await;

    if let Err(err) = main_service::next_page(&mut dashboard, api.get_ref()).await {
        flash_service_error(&err, "load the next page");
    }
    redirect("/")
}
