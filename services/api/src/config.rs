/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing bearer tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 5000). Env var: `API_PORT`.
    pub api_port: u16,
    /// Browser origin allowed by CORS and targeted by OAuth redirects
    /// (default `http://localhost:5173`). Env var: `FRONTEND_ORIGIN`.
    pub frontend_origin: String,
    /// Google OAuth client id.
    pub google_client_id: String,
    /// Google OAuth client secret.
    pub google_client_secret: String,
    /// Redirect URL registered with Google (points at `/api/auth/google/callback`).
    pub google_redirect_url: String,
    /// Directory for uploaded profile photos (default `uploads`). Env var: `UPLOAD_DIR`.
    pub upload_dir: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_owned()),
            google_client_id: std::env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID"),
            google_client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .expect("GOOGLE_CLIENT_SECRET"),
            google_redirect_url: std::env::var("GOOGLE_REDIRECT_URL")
                .expect("GOOGLE_REDIRECT_URL"),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_owned()),
        }
    }
}
