use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing_subscriber::EnvFilter;

use crate::app::{env::Envy, store::postgres::init_schema};

mod app;
mod feedbacks;
mod transactions;
mod webhooks;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let pool = PgPoolOptions::new()
        .max_connections(envy.database_max_connections)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    init_schema(&pool)
        .await
        .expect("failed to initialize database schema");

    tokio::fs::create_dir_all(envy.upload_dir())
        .await
        .expect("failed to create upload directory");

    let state = AppState {
        pool,
        envy: Arc::new(envy),
    };

    // app
    let app = app::router::build(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
