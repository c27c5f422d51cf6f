use sea_orm::Database;
use tracing::info;

use kala_api::config::ApiConfig;
use kala_api::infra::scheduler::start_scheduler;
use kala_api::router::{build_router, with_middleware};
use kala_api::state::AppState;
use kala_auth_types::identity::JwtSecret;

#[tokio::main]
async fn main() {
    kala_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let http = reqwest::Client::new();

    let state = AppState {
        db: db.clone(),
        jwt_secret: JwtSecret::new(config.jwt_secret.as_str()),
        sms: config.sms.clone(),
        http: http.clone(),
    };

    // Held for the process lifetime; dropping it stops the jobs.
    let _scheduler = start_scheduler(db, http, config.keep_alive_url.clone())
        .await
        .expect("failed to start scheduler");

    let router = with_middleware(build_router(state), &config.cors_origins);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
