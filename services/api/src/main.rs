use sea_orm::Database;
use tracing::info;

use foodoo_api::config::ApiConfig;
use foodoo_api::infra::google::HttpGoogleAuth;
use foodoo_api::router::build_router;
use foodoo_api::state::AppState;
use foodoo_auth_types::bearer::JwtSecret;
use foodoo_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    std::fs::create_dir_all(&config.upload_dir).expect("failed to create upload dir");

    let state = AppState {
        db,
        jwt_secret: JwtSecret(config.jwt_secret),
        frontend_origin: config.frontend_origin,
        google: HttpGoogleAuth {
            http: reqwest::Client::new(),
            client_id: config.google_client_id,
            client_secret: config.google_client_secret,
            redirect_url: config.google_redirect_url,
        },
        upload_dir: config.upload_dir.into(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
