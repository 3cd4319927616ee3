pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod render;
pub mod service;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::{postgres::Postgres, Pool};

use crate::config::Config;
use crate::db::{init_db_pool, postgres::PgStore, Store};
use crate::service::auth::AuthGate;
use crate::service::log::RequestLogger;

type PGPool = Pool<Postgres>;

pub const LOGIN_PATH: &str = "/accounts/login/";
pub const SESSION_TTL_SECS: usize = 12 * 60 * 60;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let config = Config::from_env();
    service::log::init_logger(config.debug);

    let pool: PGPool = init_db_pool(&config.database_url).await;
    sqlx::migrate!()
        .run(&pool)
        .await
        .unwrap_or_else(|err| panic!("failed to run migrations: {err}"));

    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let bind = (config.host.clone(), config.port);
    log::info!("listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(store.clone()))
            .app_data(web::Data::new(config.clone()))
            .wrap(RequestLogger)
            .configure(handlers::public_routes)
            .service(
                web::scope("")
                    .wrap(AuthGate::new(config.secret_key.clone()))
                    .configure(handlers::protected_routes),
            )
    })
    .bind(bind)?
    .run()
    .await
}
