//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::PgLinkRepository;

/// Handler state. Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub auth_service: Arc<AuthService>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires repositories and services over a shared pool.
    pub fn new(db: Arc<PgPool>, auth_service: Arc<AuthService>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(db.clone()));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            auth_service,
            db,
        }
    }
}
