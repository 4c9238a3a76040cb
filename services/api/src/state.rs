use std::path::PathBuf;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use foodoo_auth_types::bearer::JwtSecret;

use crate::infra::db::{DbOrderRepository, DbUserRepository};
use crate::infra::google::HttpGoogleAuth;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub frontend_origin: String,
    pub google: HttpGoogleAuth,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }
}

// Lets the `Identity` extractor pull the signing secret out of router state.
impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
