use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use rc_api::app::create_app;
use rc_api::config::{init_tracing, HttpSettings};
use rc_api::routes::auth::AppState;
use rc_core::services::{AuthService, RefreshTokenService, TokenService};
use rc_infra::{DatabasePool, MailService, MySqlTokenRepository, MySqlUserRepository};
use rc_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config.validate().context("invalid configuration")?;

    tracing::info!(environment = %config.environment, "Starting Reddit clone API server");

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if !database
        .health_check()
        .await
        .context("database health check failed")?
    {
        anyhow::bail!("database health check returned an unexpected value");
    }
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let pool = database.get_pool().clone();
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool));

    let token_service = Arc::new(TokenService::new((&config.auth.jwt).into()));
    let refresh_tokens = Arc::new(RefreshTokenService::new(token_repository));
    let mail_service = Arc::new(MailService::from_config(&config.mail));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        refresh_tokens,
        token_service,
        mail_service,
        (&config.auth).into(),
    ));
    let app_state = web::Data::new(AppState::new(auth_service));

    let settings = HttpSettings::from(&config);
    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), settings.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    database.close().await;
    Ok(())
}
