pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::{OrderOperations, OrderService};
use infrastructure::DieselStore;

pub use config::{Config, ConfigError};
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::place_order,
        handlers::orders::get_order,
        handlers::orders::get_order_history,
    ),
    components(schemas(
        handlers::orders::PlaceOrderRequest,
        handlers::orders::PlaceOrderResponse,
        handlers::orders::OrderResponse,
        handlers::orders::PagingResponse,
        handlers::orders::OrderHistoryResponse,
    )),
    tags((name = "orders", description = "Order placement and order history"))
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Registers the order routes. Expects a `web::Data<dyn OrderOperations>` in
/// the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(handlers::orders::place_order))
            .route("/{id}", web::get().to(handlers::orders::get_order)),
    )
    .route(
        "/users/{user_id}/orders",
        web::get().to(handlers::orders::get_order_history),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service: Arc<dyn OrderOperations> = Arc::new(OrderService::new(DieselStore::new(pool)));
    let service = web::Data::from(service);

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
