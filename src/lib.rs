pub mod api;
pub mod dashboard;
pub mod domain;
pub mod dto;
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
pub mod resources;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::api::InventoryApi;
    use crate::api::http::HttpInventoryApi;
    use crate::dashboard::PAGE_SIZE;
    use crate::dashboard::store::DashboardStore;
    use crate::models::config::ServerConfig;
    use crate::routes::configure;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let timeout = server_config.api_timeout_secs.map(Duration::from_secs);
        let api = HttpInventoryApi::new(&server_config.api_base_url, timeout)
            .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;
        log::info!("Using inventory backend at {}", api.base_url());

        let api: Arc<dyn InventoryApi> = Arc::new(api);
        let api = web::Data::from(api);

        let store = web::Data::new(DashboardStore::new(
            PAGE_SIZE,
            server_config.session_capacity,
        ));

        // Keys and stores for sessions and flash messages.
        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(api.clone())
                .app_data(store.clone())
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
