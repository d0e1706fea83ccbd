//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned per request through Axum's
//! state extraction. All fields are cheap to clone: the database handle is
//! a pool, the authenticator and mailer are reference-counted trait
//! objects, the blob store is a path and a base URL.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::Authenticator, mailer::Mailer, storage::BlobStore};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Blob store holding uploaded image attachments.
    pub blobs: BlobStore,

    /// Bearer token verifier guarding the admin endpoints.
    pub auth: Arc<dyn Authenticator>,

    /// Outbound mail delivery used by the booking endpoint.
    pub mailer: Arc<dyn Mailer>,

    /// Address receiving admin booking notifications.
    pub admin_email: String,

    /// Fallback locale for content rendering and attachment bookkeeping.
    pub default_locale: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        blobs: BlobStore,
        auth: Arc<dyn Authenticator>,
        mailer: Arc<dyn Mailer>,
        admin_email: String,
        default_locale: String,
    ) -> Self {
        Self {
            db,
            blobs,
            auth,
            mailer,
            admin_email,
            default_locale,
        }
    }
}
