use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::model::auth::AuthSettings;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthSettings>,
}
