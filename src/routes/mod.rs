//! HTTP handlers and the helpers they share.

use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};
use uuid::Uuid;

use crate::dashboard::store::{DashboardStore, SharedDashboard};
use crate::services::ServiceError;

pub mod main;
pub mod products;

/// Session key holding the id of the visitor's dashboard.
pub const DASHBOARD_SESSION_KEY: &str = "dashboard_id";

/// Registers every dashboard route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(main::search)
        .service(main::clear)
        .service(main::prev_page)
        .service(main::next_page)
        .service(products::new_product)
        .service(products::close_form)
        .service(products::save_product)
        .service(products::edit_product)
        .service(products::delete_product)
        .service(products::toggle_stock);
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every full page: flash alerts and the active page name.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Resolves the dashboard bound to this browser session, creating one when
/// the session has none yet.
pub fn session_dashboard(
    session: &Session,
    store: &DashboardStore,
) -> Result<SharedDashboard, HttpResponse> {
    let known = match session.get::<Uuid>(DASHBOARD_SESSION_KEY) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("Ignoring unreadable session: {err}");
            None
        }
    };

    let (id, dashboard) = store.checkout(known);
    if known != Some(id) {
        if let Err(err) = session.insert(DASHBOARD_SESSION_KEY, id) {
            log::error!("Failed to store dashboard id in session: {err}");
            return Err(HttpResponse::InternalServerError().finish());
        }
    }

    Ok(dashboard)
}

/// Flashes the user-facing message for a failed service call.
pub fn flash_service_error(err: &ServiceError, action: &str) {
    match err {
        ServiceError::Form(message) => FlashMessage::error(message.clone()).send(),
        ServiceError::NotFound => FlashMessage::error("Product not found.").send(),
        ServiceError::Api(api_err) => {
            FlashMessage::error(format!("Failed to {action}: {api_err}")).send()
        }
    }
}
