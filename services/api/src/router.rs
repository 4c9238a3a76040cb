use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{delete, get, patch, post, put},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use foodoo_core::health::{healthz, readyz};
use foodoo_core::middleware::request_id_layer;

use crate::domain::types::MAX_PHOTO_BYTES;
use crate::handlers::{
    auth::{google_callback, google_start, login, signup},
    order::{cancel_order, create_order, get_my_orders, get_order, update_order_status},
    user::{get_me, update_me},
};
use crate::state::AppState;

/// Body cap: the 5 MiB photo limit plus headroom for the other form parts.
const MAX_BODY_BYTES: usize = MAX_PHOTO_BYTES + 1024 * 1024;

fn cors_layer(frontend_origin: &str) -> CorsLayer {
    let origin = frontend_origin
        .parse::<HeaderValue>()
        .expect("invalid FRONTEND_ORIGIN");
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.frontend_origin);
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/google", get(google_start))
        .route("/api/auth/google/callback", get(google_callback))
        // Profile
        .route("/api/user/me", get(get_me))
        .route("/api/user/me", put(update_me))
        // Orders
        .route("/api/orders/my", get(get_my_orders))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .route("/api/orders/{id}", delete(cancel_order))
        // Uploaded photos are public
        .nest_service("/uploads", ServeDir::new(&state.upload_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
