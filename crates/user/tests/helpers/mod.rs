use std::{path::PathBuf, str::FromStr, sync::Arc};

use nutrio_shared::Error;
use nutrio_user::{IdentityProvider, RequestHeaders, SqliteStore, UserManager};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::migrator::{Migrate, Plan};
use tokio::sync::Mutex;

pub struct TestState {
    pub pool: SqlitePool,
    pub identity: Arc<RecordingIdentity>,
    pub headers: Arc<RequestHeaders>,
    pub manager: UserManager,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    setup_with_identity(path, RecordingIdentity::default()).await
}

pub async fn setup_with_identity(
    path: PathBuf,
    identity: RecordingIdentity,
) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    nutrio_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    let identity = Arc::new(identity);
    let headers = Arc::new(RequestHeaders::default());
    let manager = UserManager::new(
        Arc::new(SqliteStore(pool.clone())),
        identity.clone(),
        headers.clone(),
    );

    Ok(TestState {
        pool,
        identity,
        headers,
        manager,
    })
}

#[derive(Default)]
pub struct RecordingIdentity {
    pub fail: bool,
    pub fail_reset: bool,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingIdentity {
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    #[allow(dead_code)]
    pub fn failing_reset() -> Self {
        Self {
            fail_reset: true,
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for RecordingIdentity {
    async fn identify(&self, user_id: &str) -> nutrio_shared::Result<()> {
        if self.fail {
            return Err(Error::Server("paywall unavailable".to_owned()));
        }

        self.calls.lock().await.push(format!("identify:{user_id}"));

        Ok(())
    }

    async fn reset(&self) -> nutrio_shared::Result<()> {
        if self.fail_reset {
            return Err(Error::Server("paywall unavailable".to_owned()));
        }

        self.calls.lock().await.push("reset".to_owned());

        Ok(())
    }
}
