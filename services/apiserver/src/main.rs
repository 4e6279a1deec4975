use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use vsr_apiserver::config::ApiConfig;
use vsr_apiserver::infra::identity::HttpUserPort;
use vsr_apiserver::router::build_router;
use vsr_apiserver::state::AppState;
use vsr_auth_types::filter::JwtSecret;
use vsr_core::config::Config;
use vsr_domain::id::UlidGenerator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    vsr_core::tracing::init_tracing("vsr_apiserver");

    let config = ApiConfig::from_env();
    info!(?config, "loaded configuration");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let access_token = config
        .identity_provider_access_token()
        .expect("IDENTITY_PROVIDER_TOKEN_FILE or IDENTITY_PROVIDER_TOKEN must be set");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret.as_str()),
        user_port: HttpUserPort::new(
            config.identity_provider_url.as_str(),
            config.identity_provider_project_id.as_str(),
            access_token,
        ),
        ids: Arc::new(UlidGenerator),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("apiserver listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
