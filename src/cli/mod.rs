use std::sync::Arc;

use nutrio_user::{LogIdentityProvider, RequestHeaders, SqliteStore, UserManager};

pub mod calendar;
pub mod onboarding;
pub mod user;

pub async fn user_manager(config: &crate::Config) -> anyhow::Result<UserManager> {
    let pool =
        nutrio::create_pool(&config.database.url, config.database.max_connections).await?;
    nutrio::run_migrations(&pool).await?;

    Ok(UserManager::new(
        Arc::new(SqliteStore(pool)),
        Arc::new(LogIdentityProvider),
        Arc::new(RequestHeaders::default()),
    ))
}
