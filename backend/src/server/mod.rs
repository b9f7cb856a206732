//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use user_registry::Trace;
#[cfg(debug_assertions)]
use user_registry::doc::ApiDoc;
use user_registry::domain::ports::FixtureUserRepository;
use user_registry::inbound::http::health::{HealthState, live, ready};
use user_registry::inbound::http::state::HttpState;
use user_registry::inbound::http::users::{create_user, delete_user, list_users, update_user};
use user_registry::inbound::http::validation::json_config;
use user_registry::outbound::persistence::DieselUserRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build handler state from the configured persistence backend.
///
/// Uses the Diesel repository when a pool is available and falls back to the
/// in-memory fixture otherwise.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user repository");
            HttpState::from_repository(Arc::new(DieselUserRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(FixtureUserRepository::new()))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Cors::permissive())
        .wrap(Trace)
        .service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
