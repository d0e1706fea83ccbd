mod auth;
mod config;
mod controller;
mod data;
mod document;
mod error;
mod extract;
mod locale;
mod mailer;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod storage;

use std::sync::Arc;

use crate::{
    auth::StaticTokenAuthenticator, config::Config, error::AppError, mailer::LogMailer,
    state::AppState, storage::BlobStore,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState::new(
        db,
        BlobStore::new(&config.storage_root, &config.public_url),
        Arc::new(StaticTokenAuthenticator::new(&config.admin_token)),
        Arc::new(LogMailer),
        config.admin_email.clone(),
        config.default_locale.clone(),
    );

    let app = router::router().with_state(state);

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
