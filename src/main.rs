pub mod modules;
pub use modules::{auth, gadget};
pub mod api;
pub mod health;
pub mod shared;

mod config;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::auth_cookie::AuthCookieConfig;
use crate::auth::adapter::incoming::web::routes as auth_routes;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::config::AppConfig;
use crate::gadget::adapter::incoming::web::routes as gadget_routes;
use crate::gadget::adapter::outgoing::{GadgetQueryPostgres, GadgetRepositoryPostgres};
use crate::gadget::application::domain::random::rng_from_entropy;
use crate::gadget::application::gadget_use_cases::GadgetUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub auth_cookie: AuthCookieConfig,
    pub gadget: GadgetUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(user_repo, Arc::clone(&password_hasher));
    let login_user_use_case =
        LoginUserUseCase::new(user_query, password_hasher, Arc::new(jwt_service.clone()));

    // Gadgets
    let gadget = GadgetUseCases::new(
        GadgetQueryPostgres::new(Arc::clone(&db_arc)),
        GadgetRepositoryPostgres::new(Arc::clone(&db_arc)),
        rng_from_entropy(),
    );

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        auth_cookie: config.auth_cookie.clone(),
        gadget,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::logout_user_handler);
    // Gadgets
    cfg.service(gadget_routes::list_gadgets_handler);
    cfg.service(gadget_routes::create_gadget_handler);
    cfg.service(gadget_routes::update_gadget_status_handler);
    cfg.service(gadget_routes::decommission_gadget_handler);
    cfg.service(gadget_routes::initiate_self_destruct_handler);
    cfg.service(gadget_routes::confirm_self_destruct_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = %e, "Application failed");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
