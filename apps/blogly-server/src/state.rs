//! Application state - injected into every handler.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::{SqlPostRepository, SqlTagRepository, SqlUserRepository};
use sea_orm::DbConn;

use crate::templates::{MiniJinjaEngine, TemplateEngine};

/// Shared application state. Cloned per worker; holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub templates: Arc<dyn TemplateEngine>,
}

impl AppState {
    /// Build the application state over an open connection pool.
    pub fn new(db: DbConn) -> Self {
        let state = Self {
            users: Arc::new(SqlUserRepository::new(db.clone())),
            posts: Arc::new(SqlPostRepository::new(db.clone())),
            tags: Arc::new(SqlTagRepository::new(db.clone())),
            templates: Arc::new(MiniJinjaEngine::new()),
            db,
        };

        tracing::info!("Application state initialized");
        state
    }
}
